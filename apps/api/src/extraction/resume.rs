//! Resume document extraction: PDF via `pdf-extract`, plain text as UTF-8.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::extraction::lexicon::scan;
use crate::extraction::{DocumentMeta, ExtractedResume, ExtractionError, ResumeExtractor};

const PDF_MAGIC: &[u8] = b"%PDF";
const TEXT_EXTENSIONS: &[&str] = &[".txt", ".md", ".text"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Pdf,
    PlainText,
}

/// Default resume extractor. Detected skills come from the shared lexicon only.
pub struct DocumentResumeExtractor;

impl ResumeExtractor for DocumentResumeExtractor {
    fn extract(
        &self,
        bytes: &[u8],
        meta: &DocumentMeta,
    ) -> Result<ExtractedResume, ExtractionError> {
        let kind = detect_kind(bytes, meta)?;

        let text = match kind {
            DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ExtractionError::Pdf(e.to_string()))?,
            DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        };

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let skills = detect_skills(&text);
        info!(
            "Extracted {} chars and {} skills from {:?} resume",
            text.len(),
            skills.len(),
            kind
        );

        Ok(ExtractedResume { text, skills })
    }
}

/// Lexicon hits, lower-cased and deduplicated.
pub fn detect_skills(text: &str) -> Vec<String> {
    let skills: BTreeSet<String> = scan(text)
        .into_iter()
        .map(|hit| hit.entry.to_string())
        .collect();
    skills.into_iter().collect()
}

fn detect_kind(bytes: &[u8], meta: &DocumentMeta) -> Result<DocumentKind, ExtractionError> {
    if bytes.starts_with(PDF_MAGIC) {
        return Ok(DocumentKind::Pdf);
    }

    let content_type = meta
        .content_type
        .as_deref()
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase());
    let file_name = meta.file_name.as_deref().map(str::to_ascii_lowercase);

    debug!(?content_type, ?file_name, "Detecting document type");

    match content_type.as_deref() {
        Some("application/pdf") => return Ok(DocumentKind::Pdf),
        Some(ct) if ct.starts_with("text/") => return Ok(DocumentKind::PlainText),
        _ => {}
    }

    match file_name {
        Some(name) if name.ends_with(".pdf") => Ok(DocumentKind::Pdf),
        Some(name) if TEXT_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) => {
            Ok(DocumentKind::PlainText)
        }
        _ => Err(ExtractionError::UnsupportedType(
            meta.content_type
                .clone()
                .or_else(|| meta.file_name.clone())
                .unwrap_or_else(|| "unknown".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(content_type: Option<&str>, file_name: Option<&str>) -> DocumentMeta {
        DocumentMeta {
            content_type: content_type.map(str::to_string),
            file_name: file_name.map(str::to_string),
        }
    }

    #[test]
    fn test_plain_text_resume() {
        let resume = b"SKILLS\nPython, Docker, docker, AWS and Machine Learning.";
        let extracted = DocumentResumeExtractor
            .extract(resume, &meta(Some("text/plain; charset=utf-8"), None))
            .unwrap();
        assert!(extracted.text.starts_with("SKILLS"));
        assert_eq!(
            extracted.skills,
            vec!["aws", "docker", "machine learning", "python"]
        );
    }

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(
            detect_kind(b"hello", &meta(None, Some("Resume.TXT"))).unwrap(),
            DocumentKind::PlainText
        );
        assert_eq!(
            detect_kind(b"hello", &meta(Some("application/octet-stream"), Some("cv.pdf"))).unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_kind_from_magic_bytes() {
        assert_eq!(
            detect_kind(b"%PDF-1.7 ...", &meta(Some("text/plain"), None)).unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_unsupported_type() {
        let err = detect_kind(b"PK\x03\x04", &meta(Some("application/zip"), Some("cv.zip")))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType(t) if t == "application/zip"));
    }

    #[test]
    fn test_empty_document() {
        let err = DocumentResumeExtractor
            .extract(b"   \n\t", &meta(Some("text/plain"), None))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyDocument));
    }

    #[test]
    fn test_detect_skills_sorted_unique() {
        assert_eq!(detect_skills("Rust rust RUST and Golang"), vec!["golang", "rust"]);
    }
}
