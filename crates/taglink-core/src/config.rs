use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::{TrackingParams, DEFAULT_TRACKING_PREFIXES};

/// URL humanization settings (`[humanize]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanizeConfig {
    /// Query keys starting with any of these are stripped from displayed URLs.
    pub tracking_prefixes: Vec<String>,
}

impl Default for HumanizeConfig {
    fn default() -> Self {
        Self {
            tracking_prefixes: DEFAULT_TRACKING_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Global configuration loaded from `~/.config/taglink/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaglinkConfig {
    /// Optional section; built-in defaults are used when missing.
    #[serde(default)]
    pub humanize: HumanizeConfig,
}

impl TaglinkConfig {
    pub fn tracking_params(&self) -> TrackingParams {
        TrackingParams::from_prefixes(self.humanize.tracking_prefixes.iter().cloned())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("taglink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TaglinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TaglinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<TaglinkConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TaglinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
