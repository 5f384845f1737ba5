//! Configuration management for flights.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name under the user's config directory.
const APP_DIR_NAME: &str = "flights";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FLIGHTS_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTS_`, nested keys joined
///    with `__`, e.g. `FLIGHTS_STORAGE__DATA_DIR`)
/// 2. TOML config file at `~/.config/flights/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory that data file names are resolved against.
    /// Defaults to the user's home directory.
    pub data_dir: Option<PathBuf>,
    /// Rewrite the data file after `display` and `select` too.
    pub save_after_read: bool,
    /// Fail on unsupported file extensions instead of skipping persistence.
    pub strict_format: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None, // Resolved to the home directory at runtime
            save_after_read: true,
            strict_format: false,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.storage.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "storage.data_dir must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Directory that data file names are resolved against.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirUnavailable`] if no `data_dir` is configured
    /// and the home directory cannot be determined.
    pub fn base_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir().ok_or(Error::HomeDirUnavailable),
        }
    }

    /// Resolve a data file name to its full path under [`Config::base_dir`].
    ///
    /// # Errors
    ///
    /// See [`Config::base_dir`].
    pub fn resolve_data_path(&self, filename: impl AsRef<Path>) -> Result<PathBuf> {
        Ok(self.base_dir()?.join(filename))
    }
}
