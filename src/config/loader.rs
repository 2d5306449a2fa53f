use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::settings::MintSettings;
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/mintterm/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mintterm").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file is not an error: the defaults are used.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, rpc_url: Option<String>, catalog: Option<PathBuf>) -> Self {
        if let Some(rpc_url) = rpc_url {
            self.wallet.rpc_url = Some(rpc_url);
        }
        if let Some(catalog) = catalog {
            self.catalog.path = Some(catalog);
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The RPC URL, if any, is http(s)
    /// - The poll interval is non-zero
    /// - Contract address, mint value and metadata base resolve
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.wallet.rpc_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    message: format!("wallet.rpc_url '{}' must be an http(s) URL", url),
                });
            }
        }

        if self.wallet.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "wallet.poll_interval_ms must be greater than zero".to_string(),
            });
        }

        MintSettings::from_config(self)?;
        Ok(())
    }
}
