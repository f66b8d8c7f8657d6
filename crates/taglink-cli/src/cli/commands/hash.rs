//! `taglink hash <hash>` – flatten branches into a query string.

use taglink_core::filter::parse_hash_to_query_groups;

pub fn run_hash(hash: &str) {
    let groups = parse_hash_to_query_groups(Some(hash));
    tracing::debug!(branches = groups.len(), "flattened hash");
    println!("{}", groups.to_query_string());
}
