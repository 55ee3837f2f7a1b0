use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::entity_label::DEFAULT_ENDPOINT;

fn default_scheme() -> String {
    "https".to_string()
}

fn default_entity_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_true() -> bool {
    true
}

/// Site configuration loaded from `~/.config/wikilink/config.toml`.
///
/// Values are read once and passed explicitly into the functions that need
/// them (e.g. `scheme` into protocol-relative resolution); no module reads
/// this ambiently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme applied when resolving protocol-relative links.
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// wbgetentities endpoint for entity label lookups.
    #[serde(default = "default_entity_endpoint")]
    pub entity_endpoint: String,
    /// Default for the exit-interstitial preference, used when building a
    /// billing snapshot before any stored preference is known.
    #[serde(default = "default_true")]
    pub show_exit_interstitial: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            entity_endpoint: default_entity_endpoint(),
            show_exit_interstitial: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wikilink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SiteConfig = toml::from_str(&data)?;
    Ok(cfg)
}
