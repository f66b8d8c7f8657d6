//! `taglink decode <segment>` – parse one hash segment.

use anyhow::{Context, Result};
use taglink_core::filter::parse_filter_segment;

pub fn run_decode(segment: &str, json: bool) -> Result<()> {
    let spec = parse_filter_segment(segment)
        .with_context(|| format!("cannot decode filter segment {segment:?}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    let tags: Vec<&str> = spec.selected_tags.iter().map(String::as_str).collect();
    let domains: Vec<&str> = spec.selected_domains.iter().map(String::as_str).collect();
    println!("{:<8} {}", "TAGS", tags.join(", "));
    println!("{:<8} {}", "DOMAINS", domains.join(", "));
    println!("{:<8} {}", "KEYWORD", spec.search_keyword);
    Ok(())
}
