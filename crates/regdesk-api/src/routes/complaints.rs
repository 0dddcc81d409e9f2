//! # Complaints API
//!
//! Registration, retrieval, and deadline evaluation for complaint
//! records. Deadline status is always computed at request time — a
//! complaint's urgency changes as the clock runs, not when its record
//! changes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use regdesk_complaints::{milestones, ComplaintRecord, DeadlineStatus, MilestoneReport};
use regdesk_core::ComplaintId;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Register-a-complaint request, matching the complaints feed shape.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterComplaintRequest {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub summary: String,
    pub received_date: DateTime<Utc>,
    #[serde(default)]
    pub resolution_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub four_week_letter_sent: bool,
    #[serde(default)]
    pub eight_week_letter_sent: bool,
    #[serde(default)]
    pub final_response_sent: bool,
}

impl Validate for RegisterComplaintRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(deadline) = self.resolution_deadline {
            if deadline < self.received_date {
                return Err(format!(
                    "resolution deadline {deadline} precedes received date {}",
                    self.received_date
                ));
            }
        }
        Ok(())
    }
}

/// Deadline evaluation response: the full position at `evaluated_at`
/// plus milestone letter statuses.
#[derive(Debug, Serialize)]
pub struct DeadlineReport {
    pub complaint_id: ComplaintId,
    pub evaluated_at: DateTime<Utc>,
    pub status: DeadlineStatus,
    pub milestones: MilestoneReport,
}

/// Build the complaints router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/complaints", post(register_complaint))
        .route("/v1/complaints/:id", get(get_complaint))
        .route("/v1/complaints/:id/deadline", get(complaint_deadline))
}

/// POST /v1/complaints — Register a complaint.
#[utoipa::path(
    post,
    path = "/v1/complaints",
    request_body = RegisterComplaintRequest,
    responses(
        (status = 201, description = "Complaint registered"),
        (status = 422, description = "Deadline precedes receipt", body = crate::error::ErrorBody),
    ),
    tag = "complaints"
)]
pub async fn register_complaint(
    State(state): State<AppState>,
    body: Result<Json<RegisterComplaintRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ComplaintRecord>), AppError> {
    let req = extract_validated_json(body)?;

    let id = ComplaintId::new();
    let record = ComplaintRecord {
        id: Some(id),
        reference: req.reference,
        summary: req.summary,
        received_date: req.received_date,
        resolution_deadline: req.resolution_deadline,
        resolved_date: req.resolved_date,
        four_week_letter_sent: req.four_week_letter_sent,
        eight_week_letter_sent: req.eight_week_letter_sent,
        final_response_sent: req.final_response_sent,
    };

    state.complaints.insert(*id.as_uuid(), record.clone());
    tracing::info!(complaint_id = %id, reference = %record.reference, "complaint registered");

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /v1/complaints/{id} — Fetch a complaint record.
#[utoipa::path(
    get,
    path = "/v1/complaints/{id}",
    params(("id" = Uuid, Path, description = "Complaint identifier")),
    responses(
        (status = 200, description = "Complaint record"),
        (status = 404, description = "Unknown complaint", body = crate::error::ErrorBody),
    ),
    tag = "complaints"
)]
pub async fn get_complaint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ComplaintRecord>, AppError> {
    state
        .complaints
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("complaint {id}")))
}

/// GET /v1/complaints/{id}/deadline — Deadline position evaluated now.
#[utoipa::path(
    get,
    path = "/v1/complaints/{id}/deadline",
    params(("id" = Uuid, Path, description = "Complaint identifier")),
    responses(
        (status = 200, description = "Deadline status and milestone letters"),
        (status = 404, description = "Unknown complaint", body = crate::error::ErrorBody),
    ),
    tag = "complaints"
)]
pub async fn complaint_deadline(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeadlineReport>, AppError> {
    let record = state
        .complaints
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("complaint {id}")))?;

    let evaluated_at = Utc::now();
    let status = record.deadline_status_at(evaluated_at);
    let report = milestones(&record, &status);

    Ok(Json(DeadlineReport {
        complaint_id: ComplaintId::from_uuid(id),
        evaluated_at,
        status,
        milestones: report,
    }))
}
