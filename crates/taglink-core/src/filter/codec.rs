//! Single-segment filter codec: `<tags>/<domains>/<keyword>`.

use std::fmt;

use super::model::{FilterSpec, TagSet};
use super::tags::{split_tags, trim_keyword};
use crate::encoding::{decode_component, encode_component, DecodeError};

/// Separates the tag, domain and keyword fields of a segment.
pub const FIELD_DELIMITER: char = '/';
/// Separates OR-branches within a hash.
pub const BRANCH_DELIMITER: char = '#';
/// Separates members within a field, before encoding.
pub const ITEM_DELIMITER: char = ',';

/// Positional field of an encoded segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Tags,
    Domains,
    Keyword,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Tags => write!(f, "tags"),
            Field::Domains => write!(f, "domains"),
            Field::Keyword => write!(f, "keyword"),
        }
    }
}

/// Why a segment produced no [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("empty filter segment")]
    Empty,
    #[error("cannot decode {field} field: {source}")]
    Decode {
        field: Field,
        #[source]
        source: DecodeError,
    },
}

/// Strips the trailing run of whitespace and `/`, then trims both ends.
///
/// # Examples
///
/// - `clean_filter_string(Some("a,b,c/a.com/  "))` → `"a,b,c/a.com"`
/// - `clean_filter_string(Some("  x, y, z  /  /  "))` → `"x, y, z"`
/// - `clean_filter_string(None)` → `""`
pub fn clean_filter_string(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    raw.trim_end_matches(|c: char| c.is_whitespace() || c == FIELD_DELIMITER)
        .trim()
        .to_string()
}

/// Parses one encoded segment.
///
/// Missing trailing fields are empty; anything after the third field is
/// ignored. A decode failure in any field rejects the whole segment, which
/// is distinct from a successful parse whose fields are all empty.
///
/// # Examples
///
/// - `"tag1%2Ctag2/example.com%2Ctest.com/keyword%20test"` → tags
///   `{tag1, tag2}`, domains `{example.com, test.com}`, keyword `"keyword test"`
/// - `"//"` → all fields empty
/// - `""` → [`SegmentError::Empty`]
pub fn parse_filter_segment(segment: &str) -> Result<FilterSpec, SegmentError> {
    if segment.is_empty() {
        return Err(SegmentError::Empty);
    }

    let mut fields = segment.split(FIELD_DELIMITER);
    let tag_field = fields.next().unwrap_or_default();
    let domain_field = fields.next().unwrap_or_default();
    let keyword_field = fields.next().unwrap_or_default();

    let parsed = decode_field(Field::Tags, tag_field).and_then(|tags| {
        let domains = decode_field(Field::Domains, domain_field)?;
        let keyword = decode_field(Field::Keyword, keyword_field)?;
        Ok(FilterSpec {
            selected_tags: split_tags(&tags).into_iter().collect(),
            selected_domains: split_tags(&domains).into_iter().collect(),
            search_keyword: trim_keyword(&keyword),
        })
    });

    if let Err(err) = &parsed {
        tracing::debug!(segment, error = %err, "failed to parse filter segment");
    }
    parsed
}

fn decode_field(field: Field, raw: &str) -> Result<String, SegmentError> {
    decode_component(raw).map_err(|source| SegmentError::Decode { field, source })
}

/// Encodes a branch as `<tags>/<domains>/<keyword>`.
///
/// Trailing empty fields are elided and the all-empty branch is `""`.
///
/// # Examples
///
/// - `({tag1, tag2}, {example.com, test.com}, "keyword")` →
///   `"tag1%2Ctag2/example.com%2Ctest.com/keyword"`
/// - `({}, {domain}, "keyword")` → `"/domain/keyword"`
/// - `({tag}, {}, "")` → `"tag"`
pub fn serialize_filter_segment(tags: &TagSet, domains: &TagSet, keyword: &str) -> String {
    let item_delimiter = ITEM_DELIMITER.to_string();
    let encoded = [
        encode_component(&tags.join(&item_delimiter)),
        encode_component(&domains.join(&item_delimiter)),
        encode_component(keyword.trim()),
    ]
    .join(FIELD_DELIMITER.to_string().as_str());

    if encoded == "//" {
        return String::new();
    }
    encoded
        .trim_end_matches(|c: char| c == FIELD_DELIMITER || c == BRANCH_DELIMITER)
        .to_string()
}
