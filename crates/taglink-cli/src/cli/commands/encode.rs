//! `taglink encode` – build a hash segment from tags, domains and a keyword.

use taglink_core::filter::{split_tags, FilterSpec, TagSet};

/// Each argument may itself be a comma-separated list, as typed in the UI.
fn collect(values: &[String]) -> TagSet {
    values.iter().flat_map(|v| split_tags(v)).collect()
}

pub fn run_encode(tags: &[String], domains: &[String], keyword: &str) {
    let spec = FilterSpec::new(collect(tags), collect(domains), keyword);
    println!("{}", spec.to_segment());
}
