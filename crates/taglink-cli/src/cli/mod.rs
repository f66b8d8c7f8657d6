//! CLI for the taglink filter-link codec.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use taglink_core::config;

use commands::{
    run_clean, run_completions, run_decode, run_encode, run_hash, run_host, run_humanize,
    run_merge,
};

/// Top-level CLI for taglink.
#[derive(Debug, Parser)]
#[command(name = "taglink")]
#[command(about = "taglink: shareable tag/domain/keyword filter links and URL humanizer", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print a short display form of a URL (tracking params stripped).
    Humanize {
        /// URL to shorten.
        url: String,
    },

    /// Print the host name of a URL (or its scheme for non-web URLs).
    Host {
        /// URL to inspect.
        url: String,
    },

    /// Encode a filter branch as a hash segment.
    Encode {
        /// Tag to filter by; repeat or pass a comma-separated list.
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Domain to filter by; repeat or pass a comma-separated list.
        #[arg(long = "domain", value_name = "DOMAIN")]
        domains: Vec<String>,
        /// Free-text keyword.
        #[arg(long, default_value = "")]
        keyword: String,
    },

    /// Decode a single hash segment.
    Decode {
        /// Encoded segment, e.g. `tag1%2Ctag2/example.com/keyword`.
        segment: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Flatten a multi-branch hash into a `t`/`d`/`q` query string.
    Hash {
        /// Hash with `#`-separated branches (leading `#` optional).
        hash: String,
    },

    /// Print a URL's query merged with the filters in its fragment.
    Merge {
        /// Full URL including the fragment.
        url: String,
    },

    /// Strip trailing spaces and slashes from a typed filter string.
    Clean {
        /// Raw filter text.
        text: String,
    },

    /// Generate a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Humanize { url } => {
                let cfg = match cli.config.as_deref() {
                    Some(path) => config::load_from(path)?,
                    None => config::load_or_init()?,
                };
                tracing::debug!("loaded config: {:?}", cfg);
                run_humanize(&url, &cfg.tracking_params());
            }
            CliCommand::Host { url } => run_host(&url)?,
            CliCommand::Encode {
                tags,
                domains,
                keyword,
            } => run_encode(&tags, &domains, &keyword),
            CliCommand::Decode { segment, json } => run_decode(&segment, json)?,
            CliCommand::Hash { hash } => run_hash(&hash),
            CliCommand::Merge { url } => run_merge(&url)?,
            CliCommand::Clean { text } => run_clean(&text),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
