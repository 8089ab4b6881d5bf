use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::report::render::render_markdown;
use crate::state::AppState;

/// GET /api/v1/reports/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let report = state
        .reports
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Report {id} not found")))?;

    let body = render_markdown(&report)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Report rendering failed: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"skill-gap-report-{id}.md\""),
            ),
        ],
        body,
    ))
}
