pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::report::handlers as report_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/job-roles", get(handlers::handle_job_roles))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/ats-score", post(handlers::handle_ats_score))
        .route(
            "/api/v1/recommendations/format",
            post(handlers::handle_format),
        )
        // Report API
        .route(
            "/api/v1/reports/:id/export",
            get(report_handlers::handle_export),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
