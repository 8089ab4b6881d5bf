//! Recommendation Formatter — turns free-form generator output into clean, ordered lines.
//!
//! Input format is not guaranteed: numbering, markdown bullets, code fences and stray
//! whitespace all show up. Output lines carry none of those. Lines are never deduplicated.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::rules::{CATEGORY_TRIGGERS, MINUTES_SAVED_PER_MISSING_SKILL};

/// Leading `<digits>.` followed by whitespace or end of line. `3.5 years` is left alone.
static ENUMERATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.(\s+|$)").expect("valid regex"));

/// Characters stripped from the start of each line.
const LEADING_NOISE: &[char] = &['*', '-', '+', '•', '`', '#', '>'];

/// Presentation bucket for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Certification,
    Project,
    Skill,
    General,
}

impl RecommendationCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationCategory::Certification => "Certifications & Courses",
            RecommendationCategory::Project => "Projects",
            RecommendationCategory::Skill => "Resume & Skills",
            RecommendationCategory::General => "General",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub text: String,
    pub category: RecommendationCategory,
}

impl RecommendationItem {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let category = categorize(&text);
        Self { text, category }
    }
}

/// Splits `raw_text` into cleaned recommendation lines, preserving order.
pub fn format_recommendations(raw_text: &str) -> Vec<String> {
    let unified = raw_text.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .trim()
        .lines()
        .filter_map(clean_line)
        .collect()
}

/// Formats and categorizes in one pass.
pub fn format_and_categorize(raw_text: &str) -> Vec<RecommendationItem> {
    format_recommendations(raw_text)
        .into_iter()
        .map(RecommendationItem::new)
        .collect()
}

fn clean_line(line: &str) -> Option<String> {
    let stripped = line
        .trim_start_matches(|c: char| c.is_whitespace() || LEADING_NOISE.contains(&c))
        .trim_end();
    let stripped = ENUMERATION_PREFIX.replace(stripped, "");
    let cleaned = stripped.trim();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// First matching trigger table wins, in table order.
pub fn categorize(text: &str) -> RecommendationCategory {
    let lower = text.to_lowercase();
    CATEGORY_TRIGGERS
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| lower.contains(t)))
        .map(|(category, _)| *category)
        .unwrap_or(RecommendationCategory::General)
}

/// Fixed linear estimate: five minutes per missing skill.
pub fn estimated_time_saved_minutes(missing_skill_count: usize) -> u32 {
    (missing_skill_count as u32).saturating_mul(MINUTES_SAVED_PER_MISSING_SKILL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_numbering() {
        let lines = format_recommendations("1. Learn Docker\n2. Get AWS cert");
        assert_eq!(lines, vec!["Learn Docker", "Get AWS cert"]);
    }

    #[test]
    fn test_drops_blank_lines_and_bullets() {
        let lines = format_recommendations("- Item one\n\n* Item two");
        assert_eq!(lines, vec!["Item one", "Item two"]);
    }

    #[test]
    fn test_plus_bullets() {
        let lines = format_recommendations("+ Learn Docker\n+ Get AWS cert\n  + 3. Nested item");
        assert_eq!(lines, vec!["Learn Docker", "Get AWS cert", "Nested item"]);
    }

    #[test]
    fn test_crlf_and_trailing_whitespace() {
        let lines = format_recommendations("\r\n  1. First   \r\n2. Second\t\r\n\r\n");
        assert_eq!(lines, vec!["First", "Second"]);
    }

    #[test]
    fn test_markdown_and_code_fences() {
        let raw = "```\n**1. Build a Kubernetes project\n• Take an AWS course\n```";
        let lines = format_recommendations(raw);
        assert_eq!(lines, vec!["Build a Kubernetes project", "Take an AWS course"]);
    }

    #[test]
    fn test_keeps_decimal_numbers_inside_text() {
        let lines = format_recommendations("3.5 years of Rust is a plus");
        assert_eq!(lines, vec!["3.5 years of Rust is a plus"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let lines = format_recommendations("1. Learn Go\n2. Learn Go");
        assert_eq!(lines, vec!["Learn Go", "Learn Go"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(format_recommendations("").is_empty());
        assert!(format_recommendations(" \n\t\n ").is_empty());
        assert!(format_recommendations("- \n* \n1. ").is_empty());
    }

    #[test]
    fn test_unnumbered_lines_pass_through() {
        let lines = format_recommendations("Add Docker to your skills\nContribute to open source");
        assert_eq!(
            lines,
            vec!["Add Docker to your skills", "Contribute to open source"]
        );
    }

    #[test]
    fn test_categorize_certification_first() {
        assert_eq!(
            categorize("Take an online Docker course on Coursera"),
            RecommendationCategory::Certification
        );
        // mentions both a project and a certificate → certification wins
        assert_eq!(
            categorize("Earn a certificate by finishing a capstone project"),
            RecommendationCategory::Certification
        );
    }

    #[test]
    fn test_categorize_project() {
        assert_eq!(
            categorize("Add personal projects using Kubernetes to GitHub"),
            RecommendationCategory::Project
        );
    }

    #[test]
    fn test_categorize_skill() {
        assert_eq!(
            categorize("Highlight cloud work in your Resume summary"),
            RecommendationCategory::Skill
        );
    }

    #[test]
    fn test_categorize_general() {
        assert_eq!(
            categorize("Network with engineers at the company"),
            RecommendationCategory::General
        );
    }

    #[test]
    fn test_format_and_categorize() {
        let items = format_and_categorize(
            "1. Add personal projects using Docker and Kubernetes to your resume.\n\
             2. Highlight cloud experience and certification \
             (e.g., AWS Certified Solutions Architect).\n\
             3. Take an online Docker/Kubernetes course on platforms like Coursera or Udemy.",
        );
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].category, RecommendationCategory::Project);
        assert_eq!(items[1].category, RecommendationCategory::Certification);
        assert_eq!(items[2].category, RecommendationCategory::Certification);
        assert!(items[0].text.starts_with("Add personal projects"));
    }

    #[test]
    fn test_time_saved_is_linear() {
        assert_eq!(estimated_time_saved_minutes(0), 0);
        assert_eq!(estimated_time_saved_minutes(3), 15);
        assert_eq!(estimated_time_saved_minutes(11), 55);
    }
}
