//! Tracking-parameter policy for URL humanization.

/// Query keys starting with one of these are dropped by default.
pub const DEFAULT_TRACKING_PREFIXES: &[&str] =
    &["utm_", "fbclid", "gclid", "mc_", "yclid", "_ga", "zanpid"];

/// Prefixes of query keys treated as analytics attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingParams {
    prefixes: Vec<String>,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self::from_prefixes(DEFAULT_TRACKING_PREFIXES.iter().copied())
    }
}

impl TrackingParams {
    /// Empty prefixes are ignored; they would match every key.
    pub fn from_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_tracking(&self, key: &str) -> bool {
        self.prefixes.iter().any(|p| key.starts_with(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefixes_match_known_keys() {
        let tracking = TrackingParams::default();
        for key in ["utm_source", "utm_medium", "fbclid", "gclid", "mc_eid", "yclid", "_ga", "_gac", "zanpid"] {
            assert!(tracking.is_tracking(key), "{key} should be tracking");
        }
    }

    #[test]
    fn matching_is_by_prefix_only() {
        let tracking = TrackingParams::default();
        assert!(!tracking.is_tracking("valid"));
        assert!(!tracking.is_tracking("x_utm_source"));
        assert!(!tracking.is_tracking("UTM_SOURCE"));
    }

    #[test]
    fn custom_prefixes_drop_empty_entries() {
        let tracking = TrackingParams::from_prefixes(["ref", ""]);
        assert_eq!(tracking.prefixes(), ["ref".to_string()]);
        assert!(tracking.is_tracking("ref_src"));
        assert!(!tracking.is_tracking("utm_source"));
    }
}
