// Extraction collaborators: turn uploaded documents and job descriptions into the
// token lists and text the analysis core consumes.
// Extraction is CPU-bound; PDF decoding runs inside tokio::task::spawn_blocking.

pub mod job_roles;
pub mod job_skills;
pub mod lexicon;
pub mod resume;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use job_skills::LexiconJobSkillExtractor;
pub use resume::DocumentResumeExtractor;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("Document contains no extractable text")]
    EmptyDocument,

    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

/// Plain text and detected skills of one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedResume {
    pub text: String,
    /// Lower-case, deduplicated, sorted.
    pub skills: Vec<String>,
}

/// Uploaded document metadata as received from the client.
#[derive(Debug, Clone, Default)]
pub struct DocumentMeta {
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

pub trait ResumeExtractor: Send + Sync {
    fn extract(
        &self,
        bytes: &[u8],
        meta: &DocumentMeta,
    ) -> Result<ExtractedResume, ExtractionError>;
}

pub trait JobSkillExtractor: Send + Sync {
    /// Free-text skill mentions, original casing, duplicates allowed.
    fn extract(&self, job_description: &str) -> Vec<String>;
}
