//! CLI configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults ([`transport::TransportConfig::default`]).
//! 2. The TOML file (`ledger.toml` in the working directory unless `--config`
//!    names another one).
//! 3. `LEDGER_API_BASE_URL` / `--base-url`, resolved by clap.
//!
//! ```toml
//! [api]
//! base_url = "https://ledger.example.com/v1"
//! timeout_secs = 10
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use transport::TransportConfig;

/// Configuration file read when `--config` is not given. Optional.
pub const DEFAULT_CONFIG_PATH: &str = "ledger.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub api: TransportConfig,
}

impl CliConfig {
    /// Parses a configuration document.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    /// Loads the configuration from `explicit_path`, or from
    /// [`DEFAULT_CONFIG_PATH`] if it exists, or falls back to defaults.
    ///
    /// An explicitly named file that cannot be read is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = match explicit_path {
            Some(path) => path,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Applies the base URL resolved from the environment or command line.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        self
    }

    /// Rejects configurations the transport cannot work with.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            bail!("API base URL is required");
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!("API base URL must start with http:// or https://, got {base_url:?}");
        }
        if self.api.timeout_secs == 0 {
            bail!("API timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
