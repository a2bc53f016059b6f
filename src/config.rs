//! Client configuration loaded from `~/.config/webchnl/config.toml`.
//!
//! ```toml
//! base_url = "https://webchnl.live/api"
//! timeout_secs = 15
//! user_agent = "my-dashboard/1.0"
//! ```
//!
//! Every key is optional. A missing file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::http_client::ClientOptions;

/// Contents of the config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Config {
    /// Merge onto the built-in defaults.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        let defaults = ClientOptions::default();
        ClientOptions {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout: self
                .timeout_secs
                .map_or(defaults.timeout, Duration::from_secs),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}

/// Load the config from the default location.
///
/// Returns defaults if the file doesn't exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

/// Load the config from `path`, falling back to defaults when it is absent.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("webchnl")
        .join("config.toml")
}
