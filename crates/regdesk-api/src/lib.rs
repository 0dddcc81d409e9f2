//! # regdesk-api — Axum API Services for the RegDesk Compliance Stack
//!
//! HTTP surface over the pure scoring and deadline engines. Records are
//! registered into an in-memory store; every aggregation endpoint
//! recomputes from the stored records at request time, so responses are
//! always consistent with the register.
//!
//! ## API Surface
//!
//! | Prefix                         | Module                  | Domain        |
//! |--------------------------------|-------------------------|---------------|
//! | `/v1/organizations/{id}/risks` | [`routes::risks`]       | Risk register |
//! | `/v1/complaints/*`             | [`routes::complaints`]  | Complaints    |
//!
//! ## OpenAPI
//!
//! Auto-generated OpenAPI spec via utoipa derive macros at `/openapi.json`.

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the traced API router
/// so probe traffic does not pollute request traces.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::risks::router())
        .merge(routes::complaints::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
