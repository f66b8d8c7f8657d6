//! `taglink humanize <url>` – short display form of a URL.

use taglink_core::url_model::{humanize_url_with, TrackingParams};

pub fn run_humanize(url: &str, tracking: &TrackingParams) {
    println!("{}", humanize_url_with(url, tracking));
}
