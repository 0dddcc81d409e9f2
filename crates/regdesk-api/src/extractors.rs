//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for request DTOs and helpers to
//! extract + validate JSON bodies in handlers. The engines downstream are
//! permissive by design; this boundary is where out-of-range records are
//! rejected so the register stays clean.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Trait for request types that can validate their business rules
/// beyond what serde deserialization checks.
pub trait Validate {
    /// Validate business rules. Returns an error message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Extract a JSON body, mapping deserialization errors to
/// [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
///
/// Combines deserialization error mapping with business rule validation.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}

/// Validate a 5-point-scale axis at the request boundary.
pub fn check_axis(axis: &'static str, value: i32) -> Result<(), String> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(format!("invalid {axis} value {value} (expected 1-5)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_axis_accepts_the_scale() {
        for v in 1..=5 {
            assert!(check_axis("likelihood", v).is_ok());
        }
    }

    #[test]
    fn check_axis_rejects_out_of_range() {
        assert!(check_axis("likelihood", 0).is_err());
        assert!(check_axis("impact", 6).is_err());
        assert!(check_axis("impact", -1).is_err());
    }
}
