//! In-memory filter branch: tag set, domain set and keyword.

use serde::Serialize;

use super::codec::serialize_filter_segment;
use super::tags::trim_keyword;

/// Insertion-ordered set of strings.
///
/// Order only affects serialization; two sets with the same members compare
/// equal regardless of order.
#[derive(Debug, Clone, Default, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` unless already present. Returns whether it was added.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Members joined with `sep`, in insertion order.
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One OR-branch of a filter.
///
/// An empty keyword means "no keyword constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub selected_tags: TagSet,
    pub selected_domains: TagSet,
    pub search_keyword: String,
}

impl FilterSpec {
    /// Builds a branch; the keyword is trimmed and inner whitespace runs
    /// collapse to one space, as [`parse_filter_segment`] produces them.
    ///
    /// [`parse_filter_segment`]: super::parse_filter_segment
    pub fn new(selected_tags: TagSet, selected_domains: TagSet, search_keyword: &str) -> Self {
        Self {
            selected_tags,
            selected_domains,
            search_keyword: trim_keyword(search_keyword),
        }
    }

    /// True when the branch places no constraint at all.
    pub fn is_empty(&self) -> bool {
        self.selected_tags.is_empty()
            && self.selected_domains.is_empty()
            && self.search_keyword.is_empty()
    }

    /// Encoded segment form; `""` for an empty branch.
    pub fn to_segment(&self) -> String {
        serialize_filter_segment(
            &self.selected_tags,
            &self.selected_domains,
            &self.search_keyword,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_set_ignores_duplicates() {
        let mut set = TagSet::new();
        assert!(set.insert("a"));
        assert!(set.insert("b"));
        assert!(!set.insert("a"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.join(","), "a,b");
    }

    #[test]
    fn tag_set_equality_is_order_insensitive() {
        let ab: TagSet = ["a", "b"].into_iter().collect();
        let ba: TagSet = ["b", "a"].into_iter().collect();
        let abc: TagSet = ["a", "b", "c"].into_iter().collect();
        assert_eq!(ab, ba);
        assert_ne!(ab, abc);
    }

    #[test]
    fn filter_spec_trims_keyword() {
        let spec = FilterSpec::new(TagSet::new(), TagSet::new(), "  rust  ");
        assert_eq!(spec.search_keyword, "rust");
        assert!(!spec.is_empty());
        assert!(FilterSpec::default().is_empty());
    }

    #[test]
    fn filter_spec_collapses_keyword_whitespace() {
        let spec = FilterSpec::new(TagSet::new(), TagSet::new(), "a  b\t\tc");
        assert_eq!(spec.search_keyword, "a b c");
        assert_eq!(spec.to_segment(), "//a%20b%20c");
    }

    #[test]
    fn filter_spec_serializes_as_camel_case_json() {
        let spec = FilterSpec::new(
            ["tag1"].into_iter().collect(),
            ["example.com"].into_iter().collect(),
            "kw",
        );
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "selectedTags": ["tag1"],
                "selectedDomains": ["example.com"],
                "searchKeyword": "kw"
            })
        );
    }

    #[test]
    fn empty_filter_spec_has_empty_segment() {
        assert_eq!(FilterSpec::default().to_segment(), "");
    }
}
