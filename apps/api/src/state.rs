use std::sync::Arc;

use crate::config::Config;
use crate::extraction::{JobSkillExtractor, ResumeExtractor};
use crate::recommendations::RecommendationGenerator;
use crate::report::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only collaborators and the report store; no per-request data lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable recommendation backend. LLM with an API key, template otherwise.
    pub recommender: Arc<dyn RecommendationGenerator>,
    pub resume_extractor: Arc<dyn ResumeExtractor>,
    pub job_skill_extractor: Arc<dyn JobSkillExtractor>,
    pub reports: ReportStore,
}
