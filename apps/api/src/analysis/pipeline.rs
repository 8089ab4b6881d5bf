//! Analysis pipeline — composes the core stages for one request.
//!
//! Flow: match_skills → score_ats (optional) → recommendation generator →
//!       formatter → AnalysisResult.
//!
//! All request-scoped data travels in `AnalysisContext`; nothing here is shared
//! between requests.

use chrono::{DateTime, Utc};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::ats::score_ats;
use crate::analysis::matching::match_skills;
use crate::analysis::result::{assemble_result, AnalysisResult};
use crate::recommendations::{
    template_recommendations, RecommendationGenerator, RecommendationRequest,
};

/// Per-request context, created fresh for every analysis.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub request_id: Uuid,
    pub job_role: String,
    pub started_at: DateTime<Utc>,
}

impl AnalysisContext {
    pub fn new(job_role: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            job_role: job_role.into(),
            started_at: Utc::now(),
        }
    }
}

/// Transient inputs produced by the extractors.
#[derive(Debug, Clone, Default)]
pub struct AnalysisInput {
    pub resume_text: String,
    pub resume_skills: Vec<String>,
    pub job_description: String,
    pub job_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub include_ats: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { include_ats: true }
    }
}

/// Runs every stage and assembles the result. Never fails: a generator error
/// falls back to the template recommendations.
pub async fn run_analysis(
    ctx: &AnalysisContext,
    input: &AnalysisInput,
    generator: &dyn RecommendationGenerator,
    options: PipelineOptions,
) -> AnalysisResult {
    let span = info_span!(
        "analysis",
        request_id = %ctx.request_id,
        job_role = %ctx.job_role
    );

    async move {
        let match_result = match_skills(&input.resume_skills, &input.job_skills);
        info!(
            "Matched {}/{} job skills ({}%)",
            match_result.matched.len(),
            match_result.matched.len() + match_result.missing.len(),
            match_result.match_percentage
        );

        let ats_score = options
            .include_ats
            .then(|| score_ats(&input.resume_text, &input.job_description));

        let request = RecommendationRequest {
            resume_skills: input.resume_skills.clone(),
            job_description: input.job_description.clone(),
            matched_skills: match_result.matched.clone(),
            missing_skills: match_result.missing.clone(),
        };

        let raw_recommendations = match generator.generate(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "{} recommendation generator failed, using template fallback: {e}",
                    generator.backend()
                );
                template_recommendations(&request)
            }
        };

        let result = assemble_result(match_result, ats_score, &raw_recommendations);

        info!(
            "Analysis completed in {}ms with {} recommendations",
            (Utc::now() - ctx.started_at).num_milliseconds(),
            result.recommendations.len()
        );

        result
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::analysis::ats::Grade;
    use crate::errors::AppError;
    use crate::recommendations::TemplateRecommendationGenerator;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl RecommendationGenerator for FixedGenerator {
        async fn generate(&self, _request: &RecommendationRequest) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }

        fn backend(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl RecommendationGenerator for FailingGenerator {
        async fn generate(&self, _request: &RecommendationRequest) -> Result<String, AppError> {
            Err(AppError::Llm("upstream unavailable".to_string()))
        }

        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    fn sample_input() -> AnalysisInput {
        AnalysisInput {
            resume_text: "Email: a@b.com\nSKILLS\n- Python, Docker\n5 years experience".to_string(),
            resume_skills: vec!["python".to_string(), "docker".to_string()],
            job_description: "Python, Kubernetes and Docker experience".to_string(),
            job_skills: vec![
                "Python".to_string(),
                "Kubernetes".to_string(),
                "Docker".to_string(),
            ],
        }
    }

    #[tokio::test]
    async fn test_run_analysis_end_to_end() {
        let ctx = AnalysisContext::new("DevOps Engineer");
        let generator = FixedGenerator(
            "```\n1. Take a Kubernetes course\n\n\
             2. Build a Kubernetes project\n```",
        );
        let result =
            run_analysis(&ctx, &sample_input(), &generator, PipelineOptions::default()).await;

        assert_eq!(result.match_percentage, 66.67);
        assert_eq!(result.matched_skills, vec!["docker", "python"]);
        assert_eq!(result.missing_skills, vec!["Kubernetes"]);
        assert_eq!(result.estimated_time_saved_minutes, 5);
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].text, "Take a Kubernetes course");

        let ats = result.ats_score.expect("ats score enabled");
        assert!(ats.overall > 0.0);
        assert_ne!(ats.grade, Grade::APlus);
    }

    #[tokio::test]
    async fn test_generator_failure_falls_back_to_template() {
        let ctx = AnalysisContext::new("DevOps Engineer");
        let result = run_analysis(
            &ctx,
            &sample_input(),
            &FailingGenerator,
            PipelineOptions::default(),
        )
        .await;

        let fallback = template_recommendations(&RecommendationRequest {
            resume_skills: vec![],
            job_description: String::new(),
            matched_skills: vec![],
            missing_skills: vec!["Kubernetes".to_string()],
        });
        let expected = crate::analysis::formatter::format_and_categorize(&fallback);
        assert_eq!(result.recommendations, expected);
    }

    #[tokio::test]
    async fn test_ats_can_be_disabled() {
        let ctx = AnalysisContext::new("Any");
        let result = run_analysis(
            &ctx,
            &AnalysisInput::default(),
            &TemplateRecommendationGenerator,
            PipelineOptions { include_ats: false },
        )
        .await;
        assert!(result.ats_score.is_none());
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(result.estimated_time_saved_minutes, 0);
    }

    #[tokio::test]
    async fn test_runs_are_idempotent() {
        let input = sample_input();
        let generator = TemplateRecommendationGenerator;
        let options = PipelineOptions::default();
        let first = run_analysis(&AnalysisContext::new("x"), &input, &generator, options).await;
        let second = run_analysis(&AnalysisContext::new("x"), &input, &generator, options).await;
        assert_eq!(first, second);
    }

    #[test]
    fn test_contexts_are_unique() {
        assert_ne!(
            AnalysisContext::new("a").request_id,
            AnalysisContext::new("a").request_id
        );
    }
}
