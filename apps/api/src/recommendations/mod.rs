//! Recommendation generation — pluggable, trait-based producer of free-form advice text.
//!
//! Default with an API key: `LlmRecommendationGenerator`.
//! Without one: `TemplateRecommendationGenerator` (deterministic, no network).
//!
//! Output is raw text. Cleaning and categorization happen in `analysis::formatter`.
//! `AppState` holds an `Arc<dyn RecommendationGenerator>`, chosen at startup.

pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, PLAIN_TEXT_SYSTEM};
use crate::llm_client::LlmClient;
use crate::recommendations::prompts::{NONE_LISTED, RECOMMENDATION_PROMPT_TEMPLATE};

/// Suggestions per response.
const MAX_RECOMMENDATIONS: usize = 3;

/// Everything a generator may look at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub resume_skills: Vec<String>,
    pub job_description: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Implement this to swap backends without touching the pipeline or handlers.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn generate(&self, request: &RecommendationRequest) -> Result<String, AppError>;

    /// "llm" | "template", for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmRecommendationGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmRecommendationGenerator(pub LlmClient);

#[async_trait]
impl RecommendationGenerator for LlmRecommendationGenerator {
    async fn generate(&self, request: &RecommendationRequest) -> Result<String, AppError> {
        let prompt = build_prompt(request);
        let system = format!("{PLAIN_TEXT_SYSTEM} {GROUNDING_INSTRUCTION}");
        self.0
            .call_text(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Recommendation generation failed: {e}")))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

pub fn build_prompt(request: &RecommendationRequest) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{job_description}", request.job_description.trim())
        .replace("{resume_skills}", &join_or_none(&request.resume_skills))
        .replace("{matched_skills}", &join_or_none(&request.matched_skills))
        .replace("{missing_skills}", &join_or_none(&request.missing_skills))
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        NONE_LISTED.to_string()
    } else {
        skills.join(", ")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateRecommendationGenerator
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic generator. Used without an API key and as the LLM fallback.
pub struct TemplateRecommendationGenerator;

#[async_trait]
impl RecommendationGenerator for TemplateRecommendationGenerator {
    async fn generate(&self, request: &RecommendationRequest) -> Result<String, AppError> {
        Ok(template_recommendations(request))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

/// Course, project and highlight suggestions rotated across the first missing skills.
pub fn template_recommendations(request: &RecommendationRequest) -> String {
    let lines: Vec<String> = if request.missing_skills.is_empty() {
        let strengths = if request.matched_skills.is_empty() {
            "your strongest skills".to_string()
        } else {
            request.matched_skills.join(", ")
        };
        vec![
            format!("Highlight {strengths} prominently in your resume summary."),
            "Quantify your achievements with metrics such as percentages, time saved or team size."
                .to_string(),
            "Keep your GitHub portfolio current with a project that reflects this role."
                .to_string(),
        ]
    } else {
        request
            .missing_skills
            .iter()
            .take(MAX_RECOMMENDATIONS)
            .enumerate()
            .map(|(i, skill)| match i % 3 {
                0 => format!("Take an online {skill} course or certification to close this gap."),
                1 => format!("Build a small project using {skill} and publish it on GitHub."),
                _ => format!("Highlight any hands-on experience with {skill} in your resume."),
            })
            .collect()
    };

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::formatter::{format_and_categorize, RecommendationCategory};

    fn request(matched: &[&str], missing: &[&str]) -> RecommendationRequest {
        RecommendationRequest {
            resume_skills: matched.iter().map(|s| s.to_string()).collect(),
            job_description: "  We need Docker and Kubernetes.  ".to_string(),
            matched_skills: matched.iter().map(|s| s.to_string()).collect(),
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_prompt(&request(&["python"], &["Docker", "Kubernetes"]));
        assert!(prompt.contains("We need Docker and Kubernetes."));
        assert!(prompt.contains("Docker, Kubernetes"));
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_skills}"));
        assert!(!prompt.contains("{matched_skills}"));
        assert!(!prompt.contains("{missing_skills}"));
    }

    #[test]
    fn test_prompt_marks_empty_lists() {
        let prompt = build_prompt(&request(&[], &[]));
        assert!(prompt.contains(NONE_LISTED));
    }

    #[test]
    fn test_template_rotates_categories() {
        let text =
            template_recommendations(&request(&["python"], &["Docker", "Kubernetes", "AWS", "Go"]));
        let items = format_and_categorize(&text);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].category, RecommendationCategory::Certification);
        assert_eq!(items[1].category, RecommendationCategory::Project);
        assert_eq!(items[2].category, RecommendationCategory::Skill);
        assert!(items[0].text.contains("Docker"));
        assert!(items[2].text.contains("AWS"));
        assert!(!text.contains("Go "));
    }

    #[test]
    fn test_template_numbered_lines() {
        let text = template_recommendations(&request(&[], &["Rust"]));
        assert_eq!(
            text,
            "1. Take an online Rust course or certification to close this gap."
        );
    }

    #[test]
    fn test_template_without_missing_skills() {
        let text = template_recommendations(&request(&["python", "docker"], &[]));
        let items = format_and_categorize(&text);
        assert_eq!(items.len(), 3);
        assert!(items[0].text.contains("python, docker"));
    }

    #[tokio::test]
    async fn test_template_generator_is_deterministic() {
        let generator = TemplateRecommendationGenerator;
        let req = request(&["python"], &["Docker"]);
        let first = generator.generate(&req).await.unwrap();
        let second = generator.generate(&req).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(generator.backend(), "template");
    }
}
