//! Conservative skill lexicon shared by the resume and job extractors.
//!
//! Entries are lower-case display forms. Single-word entries are matched against
//! tokens, entries with a space or `/` are matched as phrases on word boundaries.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::normalizer::normalize;

#[rustfmt::skip]
pub const SKILL_LEXICON: &[&str] = &[
    // languages
    "python", "java", "javascript", "typescript", "c++", "c#", "golang", "rust",
    "ruby", "php", "kotlin", "scala", "sql", "bash", "html", "css",
    // frameworks & libraries
    "react", "angular", "vue", "node.js", "django", "flask", "fastapi", "spring boot",
    ".net", "pandas", "numpy", "tensorflow", "pytorch", "scikit-learn",
    // data & ml
    "machine learning", "deep learning", "data visualization", "nlp", "statistics",
    // infrastructure
    "docker", "kubernetes", "jenkins", "terraform", "ansible", "aws", "azure", "gcp",
    "ci/cd", "microservices", "cloud infrastructure", "linux", "git",
    // storage & apis
    "postgresql", "mysql", "mongodb", "redis", "kafka", "graphql", "rest api",
];

/// `[\w+#.\-]+` runs, the shape of a single skill token.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w+#.\-]+").expect("valid regex"));

/// Canonical key → lexicon display form, single-word entries only.
static TOKEN_ENTRIES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    SKILL_LEXICON
        .iter()
        .filter(|entry| !is_phrase(entry))
        .map(|entry| (normalize(entry), *entry))
        .collect()
});

fn is_phrase(entry: &str) -> bool {
    entry.contains(' ') || entry.contains('/')
}

/// A lexicon hit at a byte offset of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconHit {
    pub offset: usize,
    /// Slice of the scanned text as written.
    pub mention: String,
    /// Lexicon display form.
    pub entry: &'static str,
}

/// Every lexicon hit in `text`, ordered by offset.
pub fn scan(text: &str) -> Vec<LexiconHit> {
    let mut hits: Vec<LexiconHit> = TOKEN
        .find_iter(text)
        .filter_map(|m| {
            let (offset, token) = trim_token(m.start(), m.as_str());
            TOKEN_ENTRIES
                .get(&normalize(token))
                .map(|entry| LexiconHit {
                    offset,
                    mention: token.to_string(),
                    entry: *entry,
                })
        })
        .collect();

    // ASCII lower-casing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    for entry in SKILL_LEXICON.iter().filter(|e| is_phrase(e)) {
        for (offset, _) in lower.match_indices(entry) {
            let end = offset + entry.len();
            if on_word_boundary(&lower, offset, end) {
                hits.push(LexiconHit {
                    offset,
                    mention: text[offset..end].to_string(),
                    entry: *entry,
                });
            }
        }
    }

    hits.sort_by_key(|hit| hit.offset);
    hits
}

/// Drops sentence punctuation and bullet dashes around a token. A leading `.`
/// stays so `.NET` survives.
fn trim_token(start: usize, token: &str) -> (usize, &str) {
    let leading = token.len() - token.trim_start_matches('-').len();
    let trimmed = token[leading..].trim_end_matches(['.', '-']);
    (start + leading, trimmed)
}

fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
