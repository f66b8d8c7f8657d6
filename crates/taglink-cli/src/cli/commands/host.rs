//! `taglink host <url>` – host name of a URL.

use anyhow::Result;
use taglink_core::url_model::host_name;

pub fn run_host(url: &str) -> Result<()> {
    println!("{}", host_name(url)?);
    Ok(())
}
