//! Match Engine — set relationship between resume skills and job skills.
//!
//! Both sides are keyed by canonical form (see `normalizer`). When several display
//! forms share a key, the first one encountered in input order is kept. Maps are
//! `BTreeMap`s so the matched/missing sequences come out sorted by canonical key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::normalize;

/// Outcome of comparing the candidate's skills with the job's required skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Display forms from the resume side.
    pub matched: Vec<String>,
    /// Display forms from the job side.
    pub missing: Vec<String>,
    /// 0.0 – 100.0, two decimals.
    pub match_percentage: f64,
}

impl MatchResult {
    pub fn empty() -> Self {
        Self {
            matched: vec![],
            missing: vec![],
            match_percentage: 0.0,
        }
    }
}

/// Canonical key → display form, first occurrence wins.
pub fn canonical_map<S: AsRef<str>>(skills: &[S]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for skill in skills {
        let display = skill.as_ref();
        map.entry(normalize(display))
            .or_insert_with(|| display.trim().to_string());
    }
    map
}

/// Computes matched/missing skills and the match percentage.
///
/// The denominator is the number of distinct canonical job keys, so duplicate
/// job mentions never skew the percentage.
pub fn match_skills<R, J>(resume_skills: &[R], job_skills: &[J]) -> MatchResult
where
    R: AsRef<str>,
    J: AsRef<str>,
{
    let resume_map = canonical_map(resume_skills);
    let job_map = canonical_map(job_skills);

    if job_map.is_empty() {
        return MatchResult::empty();
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for (key, job_display) in &job_map {
        match resume_map.get(key) {
            Some(resume_display) => matched.push(resume_display.clone()),
            None => missing.push(job_display.clone()),
        }
    }

    let match_percentage = round_to(100.0 * matched.len() as f64 / job_map.len() as f64, 2);

    MatchResult {
        matched,
        missing,
        match_percentage,
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
