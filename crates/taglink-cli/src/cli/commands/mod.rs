//! CLI command handlers. Each command is in its own file.

mod clean;
mod completions;
mod decode;
mod encode;
mod hash;
mod host;
mod humanize;
mod merge;

pub use clean::run_clean;
pub use completions::run_completions;
pub use decode::run_decode;
pub use encode::run_encode;
pub use hash::run_hash;
pub use host::run_host;
pub use humanize::run_humanize;
pub use merge::run_merge;
