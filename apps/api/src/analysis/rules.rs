//! Static rule tables for ATS scoring and recommendation categorization.
//!
//! All trigger terms are lower-case; callers lower-case the text before testing
//! containment. Scoring code iterates these tables and never branches on a term.

use crate::analysis::ats::{AtsCategory, Grade};
use crate::analysis::formatter::RecommendationCategory;

// ────────────────────────────────────────────────────────────────────────────
// Sub-score weights
// ────────────────────────────────────────────────────────────────────────────

pub const CATEGORY_WEIGHTS: &[(AtsCategory, f64)] = &[
    (AtsCategory::Structure, 0.35),
    (AtsCategory::Formatting, 0.25),
    (AtsCategory::KeywordDensity, 0.25),
    (AtsCategory::Contact, 0.15),
];

/// Sub-scores below this get category advisories.
pub const ADVISORY_THRESHOLD: f64 = 70.0;

/// Keyword density when the job description names none of the known terms.
pub const NEUTRAL_KEYWORD_SCORE: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Indicator lists
// ────────────────────────────────────────────────────────────────────────────

/// Each present indicator is worth 100 / len points.
pub const SECTION_INDICATORS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "contact",
    "phone",
    "email",
];

/// Each present indicator is worth 100 / len points.
pub const CONTACT_INDICATORS: &[&str] = &[
    "email",
    "phone",
    "linkedin",
    "github",
    "portfolio",
    "website",
];

/// A formatting check passes when any of its terms occurs in the resume.
#[derive(Debug, Clone, Copy)]
pub struct FormattingCheck {
    pub name: &'static str,
    pub terms: &'static [&'static str],
    /// Also passes on any numeric character, ASCII or not.
    pub any_digit: bool,
}

/// Each passing check is worth 100 / len points.
pub const FORMATTING_CHECKS: &[FormattingCheck] = &[
    FormattingCheck {
        name: "bullet_points",
        terms: &["•", "-"],
        any_digit: false,
    },
    FormattingCheck {
        name: "experience_wording",
        terms: &["years", "experience", "worked"],
        any_digit: false,
    },
    FormattingCheck {
        name: "education_keywords",
        terms: &["bachelor", "master", "degree", "certification"],
        any_digit: false,
    },
    FormattingCheck {
        name: "action_verbs",
        terms: &["developed", "managed", "led", "created", "implemented"],
        any_digit: false,
    },
    FormattingCheck {
        name: "quantified_achievements",
        terms: &[],
        any_digit: true,
    },
];

pub const GENERIC_JOB_TERMS: &[&str] = &[
    "experience",
    "skills",
    "knowledge",
    "proficiency",
    "expertise",
    "familiarity",
    "understanding",
];

pub const TECHNICAL_JOB_TERMS: &[&str] = &[
    "python",
    "javascript",
    "react",
    "angular",
    "vue",
    "node",
    "sql",
    "database",
    "api",
    "cloud",
    "aws",
    "azure",
    "docker",
    "kubernetes",
];

// ────────────────────────────────────────────────────────────────────────────
// Grading
// ────────────────────────────────────────────────────────────────────────────

/// Lower bound (inclusive) → grade, highest first. Anything below the last band is `D`.
pub const GRADE_BANDS: &[(f64, Grade)] = &[
    (90.0, Grade::APlus),
    (85.0, Grade::A),
    (80.0, Grade::AMinus),
    (75.0, Grade::BPlus),
    (70.0, Grade::B),
    (65.0, Grade::BMinus),
    (60.0, Grade::CPlus),
    (55.0, Grade::C),
    (50.0, Grade::CMinus),
];

// ────────────────────────────────────────────────────────────────────────────
// Advisory text
// ────────────────────────────────────────────────────────────────────────────

/// Advisories per sub-score, in output order.
pub const CATEGORY_ADVISORIES: &[(AtsCategory, &[&str])] = &[
    (
        AtsCategory::Structure,
        &[
            "Add clearly labeled sections such as Summary, Experience, Education and Skills.",
            "Include a short professional summary or objective at the top of your resume.",
            "Make sure your contact details (email and phone) appear in a dedicated section.",
        ],
    ),
    (
        AtsCategory::Formatting,
        &[
            "Use bullet points to list responsibilities and achievements.",
            "Start bullet points with action verbs such as developed, managed, led or implemented.",
            "Quantify achievements with numbers, percentages or years of experience.",
        ],
    ),
    (
        AtsCategory::KeywordDensity,
        &[
            "Mirror the key skills and technologies named in the job description.",
            "Describe your proficiency and experience with the tools the role requires.",
        ],
    ),
    (
        AtsCategory::Contact,
        &[
            "Include complete contact information: email, phone and a LinkedIn profile.",
            "Add links to your GitHub, portfolio or personal website.",
        ],
    ),
];

/// Appended when the overall score is below the threshold.
pub const GENERIC_ADVISORIES: &[&str] = &[
    "Use standard section headers so ATS software can parse your resume reliably.",
    "Avoid tables, text boxes, images and graphics, which ATS parsers often skip.",
    "Save and submit your resume as a PDF or DOCX file.",
];

/// Emitted alone when nothing else triggers.
pub const POSITIVE_ADVISORY: &str =
    "Your resume is well structured and ATS-friendly. Keep tailoring it to each job description.";

// ────────────────────────────────────────────────────────────────────────────
// Recommendation categories
// ────────────────────────────────────────────────────────────────────────────

/// First matching rule wins; no match means `General`.
pub const CATEGORY_TRIGGERS: &[(RecommendationCategory, &[&str])] = &[
    (
        RecommendationCategory::Certification,
        &["course", "certification", "certificate", "exam"],
    ),
    (
        RecommendationCategory::Project,
        &["project", "github", "portfolio"],
    ),
    (
        RecommendationCategory::Skill,
        &["highlight", "resume", "experience", "skills"],
    ),
];

/// Minutes saved per missing skill surfaced to the candidate.
pub const MINUTES_SAVED_PER_MISSING_SKILL: u32 = 5;

/// True when `text` (already lower-cased) contains any of `terms`.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}
