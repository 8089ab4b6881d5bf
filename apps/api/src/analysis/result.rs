//! The aggregate handed to the UI, the API and the report renderer.

use serde::{Deserialize, Serialize};

use crate::analysis::ats::AtsScore;
use crate::analysis::formatter::{
    estimated_time_saved_minutes, format_and_categorize, RecommendationItem,
};
use crate::analysis::matching::MatchResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<RecommendationItem>,
    pub estimated_time_saved_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ats_score: Option<AtsScore>,
}

/// Merges stage outputs into one result. The raw recommendation text is formatted
/// and categorized here; the time-saved estimate follows the missing skill count.
pub fn assemble_result(
    match_result: MatchResult,
    ats_score: Option<AtsScore>,
    raw_recommendations: &str,
) -> AnalysisResult {
    let estimated_time_saved_minutes = estimated_time_saved_minutes(match_result.missing.len());

    AnalysisResult {
        match_percentage: match_result.match_percentage,
        matched_skills: match_result.matched,
        missing_skills: match_result.missing,
        recommendations: format_and_categorize(raw_recommendations),
        estimated_time_saved_minutes,
        ats_score,
    }
}
