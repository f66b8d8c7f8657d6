pub mod config;
pub mod encoding;
pub mod filter;
pub mod logging;
pub mod url_model;
