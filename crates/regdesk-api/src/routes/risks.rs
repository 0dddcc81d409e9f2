//! # Risk Register API
//!
//! Registration and aggregation endpoints for an organization's risk
//! register. Aggregations (heat map, summary) are recomputed from the
//! stored records on every request — the engines are cheap and pure, so
//! there is nothing to cache or invalidate.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use regdesk_core::RiskId;
use regdesk_risk::{summarize, HeatMapGrid, RiskRecord, RiskView};

use crate::error::AppError;
use crate::extractors::{check_axis, extract_validated_json, Validate};
use crate::state::{AppState, RiskEntry};

/// Register-a-risk request. Field names are camelCase to match the
/// upstream risk dashboard feed.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRiskRequest {
    #[serde(default)]
    pub title: String,
    pub likelihood: i32,
    pub impact: i32,
    #[serde(default)]
    pub residual_likelihood: Option<i32>,
    #[serde(default)]
    pub residual_impact: Option<i32>,
    #[serde(default)]
    pub control_effectiveness: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
}

impl Validate for RegisterRiskRequest {
    fn validate(&self) -> Result<(), String> {
        check_axis("likelihood", self.likelihood)?;
        check_axis("impact", self.impact)?;
        if let Some(l) = self.residual_likelihood {
            check_axis("residualLikelihood", l)?;
        }
        if let Some(i) = self.residual_impact {
            check_axis("residualImpact", i)?;
        }
        if let Some(effectiveness) = self.control_effectiveness {
            if !(0.0..=5.0).contains(&effectiveness) {
                return Err(format!(
                    "invalid control effectiveness {effectiveness} (expected 0-5)"
                ));
            }
        }
        Ok(())
    }
}

/// Risk list response.
#[derive(Debug, Serialize)]
pub struct RiskListResponse {
    pub count: usize,
    pub risks: Vec<RiskRecord>,
}

/// Portfolio summary for the organization dashboard header.
#[derive(Debug, Serialize, ToSchema)]
pub struct RiskSummaryResponse {
    pub total_risks: usize,
    pub high_risks: usize,
    pub medium_risks: usize,
    pub low_risks: usize,
    pub average_control_effectiveness: f64,
}

/// Heat-map query parameters.
#[derive(Debug, Deserialize)]
pub struct HeatMapQuery {
    #[serde(default)]
    pub view: Option<String>,
}

/// Build the risk register router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/organizations/:org_id/risks",
            post(register_risk).get(list_risks),
        )
        .route(
            "/v1/organizations/:org_id/risks/heatmap",
            get(risk_heatmap),
        )
        .route(
            "/v1/organizations/:org_id/risks/summary",
            get(risk_summary),
        )
}

/// POST /v1/organizations/{org_id}/risks — Register a risk.
#[utoipa::path(
    post,
    path = "/v1/organizations/{org_id}/risks",
    params(("org_id" = Uuid, Path, description = "Organization identifier")),
    request_body = RegisterRiskRequest,
    responses(
        (status = 201, description = "Risk registered"),
        (status = 422, description = "Axis outside the 5-point scale", body = crate::error::ErrorBody),
    ),
    tag = "risks"
)]
pub async fn register_risk(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    body: Result<Json<RegisterRiskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RiskRecord>), AppError> {
    let req = extract_validated_json(body)?;

    let id = RiskId::new();
    let record = RiskRecord {
        id: Some(id),
        title: req.title,
        likelihood: req.likelihood,
        impact: req.impact,
        residual_likelihood: req.residual_likelihood,
        residual_impact: req.residual_impact,
        control_effectiveness: req.control_effectiveness,
        category: req.category,
        status: req.status,
    };

    state.risks.insert(
        *id.as_uuid(),
        RiskEntry {
            organization_id: org_id,
            record: record.clone(),
        },
    );
    tracing::info!(organization_id = %org_id, risk_id = %id, "risk registered");

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /v1/organizations/{org_id}/risks — List the organization's risks.
#[utoipa::path(
    get,
    path = "/v1/organizations/{org_id}/risks",
    params(("org_id" = Uuid, Path, description = "Organization identifier")),
    responses(
        (status = 200, description = "Risk register entries"),
    ),
    tag = "risks"
)]
pub async fn list_risks(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Json<RiskListResponse> {
    let risks = state.risks_for_organization(&org_id);
    Json(RiskListResponse {
        count: risks.len(),
        risks,
    })
}

/// GET /v1/organizations/{org_id}/risks/heatmap — 5×5 heat-map grid.
#[utoipa::path(
    get,
    path = "/v1/organizations/{org_id}/risks/heatmap",
    params(
        ("org_id" = Uuid, Path, description = "Organization identifier"),
        ("view" = Option<String>, Query, description = "inherent (default) or residual"),
    ),
    responses(
        (status = 200, description = "Complete 5×5 grid, row 0 = impact 5"),
        (status = 422, description = "Unknown view", body = crate::error::ErrorBody),
    ),
    tag = "risks"
)]
pub async fn risk_heatmap(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Query(query): Query<HeatMapQuery>,
) -> Result<Json<HeatMapGrid>, AppError> {
    let view = match query.view.as_deref() {
        None => RiskView::default(),
        Some(raw) => raw.parse::<RiskView>().map_err(AppError::Validation)?,
    };
    let risks = state.risks_for_organization(&org_id);
    Ok(Json(HeatMapGrid::build(&risks, view)))
}

/// GET /v1/organizations/{org_id}/risks/summary — Portfolio summary.
#[utoipa::path(
    get,
    path = "/v1/organizations/{org_id}/risks/summary",
    params(("org_id" = Uuid, Path, description = "Organization identifier")),
    responses(
        (status = 200, description = "Portfolio summary", body = RiskSummaryResponse),
    ),
    tag = "risks"
)]
pub async fn risk_summary(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Json<RiskSummaryResponse> {
    let risks = state.risks_for_organization(&org_id);
    let summary = summarize(&risks);
    Json(RiskSummaryResponse {
        total_risks: summary.total_risks,
        high_risks: summary.high_risks,
        medium_risks: summary.medium_risks,
        low_risks: summary.low_risks,
        average_control_effectiveness: summary.average_control_effectiveness,
    })
}
