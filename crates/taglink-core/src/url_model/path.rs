//! Path abbreviation for display.

/// Abbreviates a URL path to `/<first>/.../<last>` when it has more than two
/// non-empty segments; shorter paths (including `/`) are returned unchanged.
pub fn simplify_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [first, .., last] if segments.len() > 2 => format!("/{first}/.../{last}"),
        _ => path.to_string(),
    }
}
