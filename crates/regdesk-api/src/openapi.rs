//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "RegDesk API — Risk & Complaints",
        version = "0.3.2",
        description = "Risk register aggregation (heat map, portfolio summary) and complaint deadline evaluation for the RegDesk Compliance Stack.",
        license(name = "BUSL-1.1")
    ),
    paths(
        // Risks
        crate::routes::risks::register_risk,
        crate::routes::risks::list_risks,
        crate::routes::risks::risk_heatmap,
        crate::routes::risks::risk_summary,
        // Complaints
        crate::routes::complaints::register_complaint,
        crate::routes::complaints::get_complaint,
        crate::routes::complaints::complaint_deadline,
    ),
    components(schemas(
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // Risk DTOs
        crate::routes::risks::RegisterRiskRequest,
        crate::routes::risks::RiskSummaryResponse,
        // Complaint DTOs
        crate::routes::complaints::RegisterComplaintRequest,
    )),
    tags(
        (name = "risks", description = "Risk register and heat-map aggregation"),
        (name = "complaints", description = "Complaints and regulatory deadline tracking"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
