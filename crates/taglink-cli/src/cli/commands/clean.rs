//! `taglink clean <text>` – tidy a typed filter string.

use taglink_core::filter::clean_filter_string;

pub fn run_clean(text: &str) {
    println!("{}", clean_filter_string(Some(text)));
}
