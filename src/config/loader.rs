use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{FatalAction, StoreConfig};

/// Environment variable overriding [`StoreConfig::fatal_action`].
pub const FATAL_ACTION_ENV: &str = "ELMER_FATAL_ACTION";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl StoreConfig {
    /// Parses configuration from a TOML document.
    ///
    /// Missing keys fall back to their defaults, so an empty document is
    /// valid.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::ParseError { source })
    }

    /// Loads configuration from a specific file.
    ///
    /// - If the file doesn't exist, returns `StoreConfig::default()`.
    /// - Returns an error if reading or parsing fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(StoreConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Applies the `ELMER_FATAL_ACTION` override, if set.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        match std::env::var(FATAL_ACTION_ENV) {
            Ok(value) => self.with_fatal_action_override(&value),
            Err(_) => Ok(self),
        }
    }

    fn with_fatal_action_override(mut self, value: &str) -> Result<Self, ConfigError> {
        self.fatal_action = match value.trim().to_ascii_lowercase().as_str() {
            "abort" => FatalAction::Abort,
            "panic" => FatalAction::Panic,
            other => {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be 'abort' or 'panic', got '{}'", FATAL_ACTION_ENV, other),
                })
            }
        };
        Ok(self)
    }
}
