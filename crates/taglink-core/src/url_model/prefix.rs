//! Textual clean-up shared by the parsed and fallback display paths.

/// Strips a leading `http://` or `https://`, then a leading `www.`.
pub(super) fn strip_display_prefix(s: &str) -> &str {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s);
    rest.strip_prefix("www.").unwrap_or(rest)
}

/// Display form for input that is not an absolute URL: prefix stripped, query
/// and fragment discarded.
pub(super) fn fallback_display(raw: &str) -> String {
    strip_display_prefix(raw)
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default()
        .to_string()
}
