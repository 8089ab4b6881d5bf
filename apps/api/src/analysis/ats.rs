//! ATS Scorer — document-quality score independent of skill matching.
//!
//! Substring containment on lower-cased text only. No tokenization, no NLP.
//! Four weighted sub-scores feed the overall score; every rule lives in `rules`.
//!
//! Sub-scores are reported rounded to one decimal and the overall score is the
//! weighted sum of those reported values, also rounded to one decimal.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::matching::round_to;
use crate::analysis::rules::{
    contains_any, ADVISORY_THRESHOLD, CATEGORY_ADVISORIES, CATEGORY_WEIGHTS, CONTACT_INDICATORS,
    FORMATTING_CHECKS, GENERIC_ADVISORIES, GENERIC_JOB_TERMS, GRADE_BANDS, NEUTRAL_KEYWORD_SCORE,
    POSITIVE_ADVISORY, SECTION_INDICATORS, TECHNICAL_JOB_TERMS,
};

/// The four weighted sub-score categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsCategory {
    Structure,
    Formatting,
    KeywordDensity,
    Contact,
}

/// Letter grade derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full ATS report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall: f64,
    pub structure: f64,
    pub formatting: f64,
    pub keyword_density: f64,
    pub contact: f64,
    pub grade: Grade,
    pub recommendations: Vec<String>,
}

impl AtsScore {
    pub fn sub_score(&self, category: AtsCategory) -> f64 {
        match category {
            AtsCategory::Structure => self.structure,
            AtsCategory::Formatting => self.formatting,
            AtsCategory::KeywordDensity => self.keyword_density,
            AtsCategory::Contact => self.contact,
        }
    }
}

/// Scores `resume_text` against `job_description`. Never fails; empty text scores zero
/// on structure, formatting and contact.
pub fn score_ats(resume_text: &str, job_description: &str) -> AtsScore {
    let resume = resume_text.to_lowercase();
    let job = job_description.to_lowercase();

    let structure = round_to(structure_score(&resume), 1);
    let formatting = round_to(formatting_score(&resume), 1);
    let keyword_density = round_to(keyword_density_score(&resume, &job), 1);
    let contact = round_to(contact_score(&resume), 1);

    let mut score = AtsScore {
        overall: 0.0,
        structure,
        formatting,
        keyword_density,
        contact,
        grade: Grade::D,
        recommendations: vec![],
    };

    score.overall = weighted_overall(&score);
    score.grade = grade_for(score.overall);
    score.recommendations = build_recommendations(&score);

    debug!(
        structure,
        formatting,
        keyword_density,
        contact,
        overall = score.overall,
        grade = %score.grade,
        "ATS score computed"
    );

    score
}

/// Weighted sum of the reported sub-scores, rounded to one decimal.
pub fn weighted_overall(score: &AtsScore) -> f64 {
    let total: f64 = CATEGORY_WEIGHTS
        .iter()
        .map(|(category, weight)| score.sub_score(*category) * weight)
        .sum();
    round_to(total.clamp(0.0, 100.0), 1)
}

pub fn grade_for(overall: f64) -> Grade {
    GRADE_BANDS
        .iter()
        .find(|(lower, _)| overall >= *lower)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::D)
}

/// Share of `indicators` present in `text`, scaled to 0 – 100.
fn indicator_score(text: &str, indicators: &[&str]) -> f64 {
    if indicators.is_empty() {
        return 0.0;
    }
    let found = indicators.iter().filter(|i| text.contains(*i)).count();
    (found as f64 * (100.0 / indicators.len() as f64)).min(100.0)
}

fn structure_score(resume: &str) -> f64 {
    indicator_score(resume, SECTION_INDICATORS)
}

fn contact_score(resume: &str) -> f64 {
    indicator_score(resume, CONTACT_INDICATORS)
}

fn formatting_score(resume: &str) -> f64 {
    let has_digit = resume.chars().any(char::is_numeric);
    let per_check = 100.0 / FORMATTING_CHECKS.len() as f64;
    let passed: Vec<&str> = FORMATTING_CHECKS
        .iter()
        .filter(|check| contains_any(resume, check.terms) || (check.any_digit && has_digit))
        .map(|check| check.name)
        .collect();
    debug!(?passed, "Formatting checks passed");
    (passed.len() as f64 * per_check).min(100.0)
}

/// Job terms from the fixed vocabulary that appear in the job description.
pub fn job_keyword_set(job: &str) -> Vec<&'static str> {
    GENERIC_JOB_TERMS
        .iter()
        .chain(TECHNICAL_JOB_TERMS)
        .filter(|term| job.contains(*term))
        .copied()
        .collect()
}

fn keyword_density_score(resume: &str, job: &str) -> f64 {
    let keywords = job_keyword_set(job);
    if keywords.is_empty() {
        return NEUTRAL_KEYWORD_SCORE;
    }
    let matched = keywords.iter().filter(|k| resume.contains(*k)).count();
    (100.0 * matched as f64 / keywords.len() as f64).min(100.0)
}

/// Category advisories in table order, then generic hygiene, or one affirmation.
fn build_recommendations(score: &AtsScore) -> Vec<String> {
    let mut recommendations: Vec<String> = CATEGORY_ADVISORIES
        .iter()
        .filter(|(category, _)| score.sub_score(*category) < ADVISORY_THRESHOLD)
        .flat_map(|(_, advisories)| advisories.iter().map(|a| a.to_string()))
        .collect();

    if score.overall < ADVISORY_THRESHOLD {
        recommendations.extend(GENERIC_ADVISORIES.iter().map(|a| a.to_string()));
    }

    if recommendations.is_empty() {
        recommendations.push(POSITIVE_ADVISORY.to_string());
    }

    recommendations
}
