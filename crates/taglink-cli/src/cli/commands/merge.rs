//! `taglink merge <url>` – existing query plus hash-derived filters.

use anyhow::{Context, Result};
use taglink_core::filter::merge_hash_into_query_str;
use url::form_urlencoded;

pub fn run_merge(url: &str) -> Result<()> {
    let pairs = merge_hash_into_query_str(url).with_context(|| format!("invalid URL {url:?}"))?;
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&pairs)
        .finish();
    println!("{query}");
    Ok(())
}
