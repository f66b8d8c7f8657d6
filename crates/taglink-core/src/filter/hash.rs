//! Multi-branch filter hashes (`<segment>#<segment>...`) and their flattened
//! query form (`t`, `d`, `q`).

use std::fmt;

use url::form_urlencoded;
use url::Url;

use super::codec::{parse_filter_segment, BRANCH_DELIMITER, ITEM_DELIMITER};
use super::model::FilterSpec;

/// Query parameter produced when flattening a hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `t`: comma-joined tags of one branch.
    Tags,
    /// `d`: comma-joined domains of one branch.
    Domains,
    /// `q`: keyword of one branch.
    Keyword,
}

impl QueryKey {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKey::Tags => "t",
            QueryKey::Domains => "d",
            QueryKey::Keyword => "q",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered multi-valued `t`/`d`/`q` pairs.
///
/// A key that no branch contributed to is absent; it is never present with
/// an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryGroups {
    pairs: Vec<(QueryKey, String)>,
}

impl QueryGroups {
    /// First value for `key`.
    pub fn get(&self, key: QueryKey) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in branch order.
    pub fn get_all(&self, key: QueryKey) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QueryKey, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` serialization, e.g.
    /// `t=tag1%2Ctag2&d=example.com&q=keyword`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key.as_str(), value);
        }
        serializer.finish()
    }

    fn append_branch(&mut self, spec: &FilterSpec) {
        let item_delimiter = ITEM_DELIMITER.to_string();
        if !spec.selected_tags.is_empty() {
            self.pairs
                .push((QueryKey::Tags, spec.selected_tags.join(&item_delimiter)));
        }
        if !spec.selected_domains.is_empty() {
            self.pairs
                .push((QueryKey::Domains, spec.selected_domains.join(&item_delimiter)));
        }
        if !spec.search_keyword.is_empty() {
            self.pairs
                .push((QueryKey::Keyword, spec.search_keyword.clone()));
        }
    }
}

/// Branches of `hash` that parse; unparsable branches are skipped.
fn parsed_branches(hash: Option<&str>) -> impl Iterator<Item = FilterSpec> + '_ {
    hash.filter(|h| !h.trim().is_empty())
        .unwrap_or_default()
        .split(BRANCH_DELIMITER)
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| parse_filter_segment(piece).ok())
}

/// Parses every branch of `hash`, skipping branches that fail to decode.
///
/// A leading `#` (as in `location.hash`) is accepted.
pub fn parse_filter_hash(hash: Option<&str>) -> Vec<FilterSpec> {
    parsed_branches(hash).collect()
}

/// Encodes branches as a hash, dropping branches that place no constraint.
pub fn serialize_filter_hash(branches: &[FilterSpec]) -> String {
    branches
        .iter()
        .map(FilterSpec::to_segment)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(BRANCH_DELIMITER.to_string().as_str())
}

/// Flattens `hash` into `t`/`d`/`q` groups.
///
/// Each parsed branch appends its tags, domains and keyword (only those that
/// are non-empty). Branches that fail to decode contribute nothing and do not
/// stop later branches.
///
/// # Examples
///
/// `"tag1%2Ctag2/example.com/keyword#tag3/example2.com/keyword2"` →
/// `t=["tag1,tag2", "tag3"]`, `d=["example.com", "example2.com"]`,
/// `q=["keyword", "keyword2"]`
pub fn parse_hash_to_query_groups(hash: Option<&str>) -> QueryGroups {
    let mut groups = QueryGroups::default();
    for spec in parsed_branches(hash) {
        groups.append_branch(&spec);
    }
    groups
}

/// Existing query pairs of `url` followed by the groups parsed from its
/// fragment. Same-named existing pairs are kept, never replaced.
pub fn merge_hash_into_query(url: &Url) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let groups = parse_hash_to_query_groups(url.fragment());
    pairs.extend(
        groups
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), value.to_string())),
    );
    tracing::debug!(url = %url, merged = pairs.len(), "merged hash filters into query");
    pairs
}

/// [`merge_hash_into_query`] for a URL that has not been parsed yet.
pub fn merge_hash_into_query_str(href: &str) -> Result<Vec<(String, String)>, url::ParseError> {
    let url = Url::parse(href)?;
    Ok(merge_hash_into_query(&url))
}
