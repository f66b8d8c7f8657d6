//! Tag and keyword normalization primitives.

use super::codec::ITEM_DELIMITER;

/// Splits a decoded, comma-joined tag list into unique trimmed tokens.
///
/// Inverse of joining tags with `,`: empty tokens are dropped and the first
/// occurrence of a duplicate wins.
///
/// # Examples
///
/// - `split_tags(" a , b,,a ")` → `["a", "b"]`
/// - `split_tags("")` → `[]`
pub fn split_tags(text: &str) -> Vec<String> {
    normalize_and_deduplicate(text.split(ITEM_DELIMITER))
}

/// Trims each string, drops empty ones and removes case-sensitive duplicates,
/// keeping the order of first occurrence.
pub fn normalize_and_deduplicate<I, S>(strings: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for s in strings {
        let trimmed = s.as_ref().trim();
        if !trimmed.is_empty() && !out.iter().any(|existing| existing == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Collapses whitespace runs to a single space and trims the ends.
pub fn trim_keyword(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
