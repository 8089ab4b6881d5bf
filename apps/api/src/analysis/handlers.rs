use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::ats::{score_ats, AtsScore};
use crate::analysis::formatter::{
    estimated_time_saved_minutes, format_and_categorize, RecommendationItem,
};
use crate::analysis::matching::{match_skills, MatchResult};
use crate::analysis::pipeline::{run_analysis, AnalysisContext, AnalysisInput, PipelineOptions};
use crate::analysis::result::AnalysisResult;
use crate::errors::AppError;
use crate::extraction::job_roles::{find_description, JobRole, JOB_ROLES};
use crate::extraction::DocumentMeta;
use crate::report::StoredReport;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// POST /api/v1/analyze
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub result: AnalysisResult,
}

#[derive(Default)]
struct AnalyzeForm {
    file: Option<(Bytes, DocumentMeta)>,
    job_role: Option<String>,
    job_description: Option<String>,
}

/// POST /api/v1/analyze
///
/// Multipart fields: `file` (PDF or plain text), `job_role`, optional `job_description`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_analyze_form(multipart).await?;

    let job_role = form
        .job_role
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::Validation("Field 'job_role' is required".to_string()))?;

    let job_description = match form.job_description.filter(|d| !d.trim().is_empty()) {
        Some(description) => description,
        None => find_description(&job_role)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown job role '{job_role}'; provide a job_description"
                ))
            })?
            .to_string(),
    };

    let (bytes, meta) = form
        .file
        .ok_or_else(|| AppError::Validation("Field 'file' is required".to_string()))?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let extractor = state.resume_extractor.clone();
    let resume = tokio::task::spawn_blocking(move || extractor.extract(&bytes, &meta))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))??;

    let job_skills = state.job_skill_extractor.extract(&job_description);

    let ctx = AnalysisContext::new(job_role);
    let input = AnalysisInput {
        resume_text: resume.text,
        resume_skills: resume.skills,
        job_description,
        job_skills,
    };
    let options = PipelineOptions {
        include_ats: state.config.enable_ats_score,
    };

    let result = run_analysis(&ctx, &input, state.recommender.as_ref(), options).await;

    state
        .reports
        .insert(StoredReport {
            id: ctx.request_id,
            job_role: ctx.job_role.clone(),
            generated_at: ctx.started_at,
            result: result.clone(),
        })
        .await;
    info!(
        "Stored report {} ({} cached)",
        ctx.request_id,
        state.reports.count().await
    );

    Ok(Json(AnalyzeResponse {
        analysis_id: ctx.request_id,
        result,
    }))
}

async fn read_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let meta = DocumentMeta {
                    content_type: field.content_type().map(str::to_string),
                    file_name: field.file_name().map(str::to_string),
                };
                let bytes = field.bytes().await.map_err(multipart_error)?;
                form.file = Some((bytes, meta));
            }
            "job_role" => form.job_role = Some(field.text().await.map_err(multipart_error)?),
            "job_description" => {
                form.job_description = Some(field.text().await.map_err(multipart_error)?)
            }
            _ => {}
        }
    }

    Ok(form)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// POST /api/v1/match
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub job_skills: Vec<String>,
}

/// POST /api/v1/match
pub async fn handle_match(Json(req): Json<MatchRequest>) -> Json<MatchResult> {
    Json(match_skills(&req.resume_skills, &req.job_skills))
}

// ────────────────────────────────────────────────────────────────────────────
// POST /api/v1/ats-score
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

/// POST /api/v1/ats-score
pub async fn handle_ats_score(Json(req): Json<AtsScoreRequest>) -> Json<AtsScore> {
    Json(score_ats(&req.resume_text, &req.job_description))
}

// ────────────────────────────────────────────────────────────────────────────
// POST /api/v1/recommendations/format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub raw_text: String,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResponse {
    pub recommendations: Vec<RecommendationItem>,
    pub estimated_time_saved_minutes: u32,
}

/// POST /api/v1/recommendations/format
pub async fn handle_format(Json(req): Json<FormatRequest>) -> Json<FormatResponse> {
    Json(FormatResponse {
        recommendations: format_and_categorize(&req.raw_text),
        estimated_time_saved_minutes: estimated_time_saved_minutes(req.missing_skills.len()),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// GET /api/v1/job-roles
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/job-roles
pub async fn handle_job_roles() -> Json<&'static [JobRole]> {
    Json(JOB_ROLES)
}
