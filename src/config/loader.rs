use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Longest simulated delay accepted from the config file.
pub const MAX_LATENCY_MS: u64 = 60_000;

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
    /// Uses `~/.config/busvoz/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("busvoz").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Simulated delays do not exceed [`MAX_LATENCY_MS`]
    /// - An explicit session path is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("latency.auth_ms", self.latency.auth_ms),
            ("latency.submit_ms", self.latency.submit_ms),
        ] {
            if value > MAX_LATENCY_MS {
                return Err(ConfigError::ValidationError {
                    message: format!("{} = {} exceeds {} ms", name, value, MAX_LATENCY_MS),
                });
            }
        }

        if let Some(path) = &self.session.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "session.path must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
