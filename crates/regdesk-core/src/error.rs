//! # Error Hierarchy
//!
//! Structured error types for the RegDesk stack, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The scoring and deadline engines are deliberately infallible — malformed
//! records degrade to skipped cells and zero summaries. The variants here
//! exist for the layers that do fail: request validation at the API
//! boundary, JSON decoding, and file I/O in the CLI.

use thiserror::Error;

/// Top-level error type for the RegDesk stack.
#[derive(Error, Debug)]
pub enum RegdeskError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors raised at the request boundary.
///
/// The engines never raise these — a risk record with likelihood 7 is
/// silently skipped by the heat-map aggregation. The API layer rejects
/// such records at registration time so the register stays clean, and
/// these errors carry the invalid input so operators can diagnose the
/// upstream feed without guesswork.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A risk axis (likelihood or impact) is outside the 5-point scale.
    #[error("invalid {axis} value {value} (expected 1-5)")]
    AxisOutOfRange {
        /// Which axis was rejected ("likelihood", "impact", ...).
        axis: &'static str,
        /// The rejected value.
        value: i32,
    },

    /// Control effectiveness is outside the 0-5 scale.
    #[error("invalid control effectiveness {0} (expected 0-5)")]
    ControlEffectivenessOutOfRange(f64),

    /// A complaint's resolution deadline precedes its received date.
    #[error("resolution deadline {deadline} precedes received date {received}")]
    DeadlineBeforeReceived {
        /// The rejected deadline (ISO 8601).
        deadline: String,
        /// The received date (ISO 8601).
        received: String,
    },

    /// An identifier string could not be parsed as a UUID.
    #[error("invalid identifier: \"{0}\" (expected UUID)")]
    InvalidIdentifier(String),
}
