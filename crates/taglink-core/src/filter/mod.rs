//! Filter-link codec.
//!
//! A filter branch is encoded as `<tags>/<domains>/<keyword>`, each field the
//! percent-encoded, comma-joined member list. Branches are OR-combined by
//! joining them with `#`, which makes the whole filter fit in a URL fragment.
//! Parsed hashes can also be flattened into multi-valued `t`/`d`/`q` query
//! parameters.

mod codec;
mod dedupe;
mod hash;
mod model;
mod tags;

pub use codec::{
    clean_filter_string, parse_filter_segment, serialize_filter_segment, Field, SegmentError,
    BRANCH_DELIMITER, FIELD_DELIMITER, ITEM_DELIMITER,
};
pub use dedupe::deduplicate_lists;
pub use hash::{
    merge_hash_into_query, merge_hash_into_query_str, parse_filter_hash,
    parse_hash_to_query_groups, serialize_filter_hash, QueryGroups, QueryKey,
};
pub use model::{FilterSpec, TagSet};
pub use tags::{normalize_and_deduplicate, split_tags, trim_keyword};
