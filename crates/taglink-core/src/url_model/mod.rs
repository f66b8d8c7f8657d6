//! URL modeling for display.
//!
//! Turns bookmarked URLs into short, human-readable strings: tracking
//! parameters removed, long paths abbreviated, scheme and `www.` dropped.

mod path;
mod prefix;
mod tracking;

pub use path::simplify_path;
pub use tracking::{TrackingParams, DEFAULT_TRACKING_PREFIXES};

use prefix::{fallback_display, strip_display_prefix};
use url::Url;

use crate::encoding::decode_component;

/// Failure to extract a host name from a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {href:?} as a URL: {source}")]
pub struct HostNameError {
    pub href: String,
    #[source]
    pub source: url::ParseError,
}

/// [`humanize_url_with`] using the default tracking prefixes.
pub fn humanize_url(url: &str) -> String {
    humanize_url_with(url, &TrackingParams::default())
}

/// Shortens `url` for display. Never fails.
///
/// Query pairs whose key starts with a tracking prefix are dropped, paths
/// with more than two segments become `/<first>/.../<last>`, the result is
/// percent-decoded and a trailing `/` and leading `http(s)://`/`www.` are
/// removed. Input that does not parse as an absolute URL with a tuple origin,
/// or whose rebuilt form does not decode, falls back to stripping the prefix
/// and cutting at the first `?` or `#`.
///
/// # Examples
///
/// - `"https://www.example.com/path1/path2/path3?utm_source=test&valid=1#section"`
///   → `"example.com/path1/.../path3?valid=1#section"`
/// - `"https://example.com#anchor"` → `"example.com/#anchor"`
/// - `"invalid-url"` → `"invalid-url"`
pub fn humanize_url_with(url: &str, tracking: &TrackingParams) -> String {
    match try_humanize(url, tracking) {
        Some(display) => display,
        None => {
            tracing::debug!(url, "falling back to textual URL clean-up");
            fallback_display(url)
        }
    }
}

fn try_humanize(raw: &str, tracking: &TrackingParams) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !tracking.is_tracking(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    // Opaque origins serialize as "null", which does not parse.
    let mut cleaned = Url::parse(&parsed.origin().ascii_serialization()).ok()?;
    cleaned.set_path(&simplify_path(parsed.path()));
    if !kept.is_empty() {
        cleaned.query_pairs_mut().extend_pairs(&kept);
    }

    let mut display = String::from(cleaned);
    if let Some(fragment) = parsed.fragment().filter(|f| !f.is_empty()) {
        display.push('#');
        display.push_str(fragment);
    }

    let decoded = decode_component(&display).ok()?;
    let trimmed = decoded.strip_suffix('/').unwrap_or(&decoded);
    Some(strip_display_prefix(trimmed).to_string())
}

/// Host of an `http`, `https` or `ftp` URL; for other schemes the scheme
/// with its colon (e.g. `"mailto:"`). Empty input yields `""`.
pub fn host_name(href: &str) -> Result<String, HostNameError> {
    if href.is_empty() {
        return Ok(String::new());
    }
    let url = Url::parse(href).map_err(|source| HostNameError {
        href: href.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" | "ftp" => Ok(url.host_str().unwrap_or_default().to_string()),
        scheme => Ok(format!("{scheme}:")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_strips_tracking_and_abbreviates_path() {
        assert_eq!(
            humanize_url("https://www.example.com/path1/path2/path3?utm_source=test&valid=1#section"),
            "example.com/path1/.../path3?valid=1#section"
        );
    }

    #[test]
    fn humanize_preserves_valid_params_in_order() {
        assert_eq!(
            humanize_url("http://example.com?foo=bar&gclid=123&valid=true"),
            "example.com/?foo=bar&valid=true"
        );
        assert_eq!(
            humanize_url("https://example.com/x?b=2&a=1&b=3"),
            "example.com/x?b=2&a=1&b=3"
        );
    }

    #[test]
    fn humanize_drops_query_when_only_tracking_params() {
        assert_eq!(
            humanize_url("https://example.com/post?utm_source=a&fbclid=b"),
            "example.com/post"
        );
    }

    #[test]
    fn humanize_long_path() {
        assert_eq!(humanize_url("https://example.com/a/b/c/d/e"), "example.com/a/.../e");
    }

    #[test]
    fn humanize_fragment_without_path_keeps_root_slash() {
        assert_eq!(humanize_url("https://example.com#anchor"), "example.com/#anchor");
    }

    #[test]
    fn humanize_removes_single_trailing_slash() {
        assert_eq!(humanize_url("https://example.com/path/"), "example.com/path");
        assert_eq!(humanize_url("https://example.com/"), "example.com");
    }

    #[test]
    fn humanize_empty_fragment_is_dropped() {
        assert_eq!(humanize_url("https://example.com/page#"), "example.com/page");
    }

    #[test]
    fn humanize_decodes_escapes() {
        assert_eq!(
            humanize_url("https://example.com/%E4%B8%AD%E6%96%87?q=%E6%90%9C"),
            "example.com/中文?q=搜"
        );
    }

    #[test]
    fn humanize_keeps_port_and_other_hierarchical_schemes() {
        assert_eq!(humanize_url("http://www.example.com:8080/a"), "example.com:8080/a");
        assert_eq!(humanize_url("ftp://www.example.com/pub"), "ftp://www.example.com/pub");
    }

    #[test]
    fn humanize_invalid_url_falls_back() {
        assert_eq!(humanize_url("invalid-url"), "invalid-url");
        assert_eq!(humanize_url("www.example.com/a?b=1"), "example.com/a");
        assert_eq!(humanize_url(""), "");
    }

    #[test]
    fn humanize_opaque_origin_falls_back() {
        assert_eq!(
            humanize_url("mailto:someone@example.com?subject=hi"),
            "mailto:someone@example.com"
        );
    }

    #[test]
    fn humanize_undecodable_escape_falls_back() {
        assert_eq!(
            humanize_url("https://www.example.com/%E0%A4%A?x=1"),
            "example.com/%E0%A4%A"
        );
        assert_eq!(humanize_url("https://example.com/%FF"), "example.com/%FF");
    }

    #[test]
    fn humanize_with_custom_tracking() {
        let tracking = TrackingParams::from_prefixes(["ref"]);
        assert_eq!(
            humanize_url_with("https://example.com/?ref=hn&utm_source=x", &tracking),
            "example.com/?utm_source=x"
        );
    }

    #[test]
    fn host_name_for_web_schemes() {
        assert_eq!(host_name("https://www.example.com/a").unwrap(), "www.example.com");
        assert_eq!(host_name("ftp://files.example.org").unwrap(), "files.example.org");
    }

    #[test]
    fn host_name_for_other_schemes() {
        assert_eq!(host_name("mailto:a@example.com").unwrap(), "mailto:");
        assert_eq!(host_name("chrome://extensions").unwrap(), "chrome:");
    }

    #[test]
    fn host_name_empty_and_invalid() {
        assert_eq!(host_name("").unwrap(), "");
        assert!(host_name("not a url").is_err());
    }
}
