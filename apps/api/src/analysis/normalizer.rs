//! Skill Normalizer — reduces a free-text skill mention to its canonical comparison key.

/// Characters kept in a canonical key besides alphanumerics and `_`.
const KEPT_SYMBOLS: &[char] = &['+', '#', '.', '-'];

/// Canonicalizes a raw skill token.
///
/// Lower-cases, trims outer whitespace, then drops every character that is not
/// alphanumeric, `_`, `+`, `#`, `.` or `-`. Inner whitespace is dropped too, so
/// `"CI/CD"` and `"ci cd"` both become `"cicd"`.
///
/// The result may be empty. An empty key is still a valid key.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .trim()
        .chars()
        .filter(|c| is_key_char(*c))
        .collect()
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || KEPT_SYMBOLS.contains(&c)
}
