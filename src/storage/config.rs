//! Configuration management
//!
//! API URL and request timeout stored in a TOML file.
//! URL priority: CLI argument > MBTA_URL environment variable > config.toml > default

use super::Result;
use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const URL_ENV_VAR: &str = "MBTA_URL";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// MBTA API base URL
    pub url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        Ok(home_dir
            .join(".config")
            .join("mbta-client")
            .join("config.toml"))
    }

    /// Resolve the base URL, checking the CLI argument and MBTA_URL first
    pub fn resolve_url(&self, cli_url: Option<&str>) -> String {
        let env_url = std::env::var(URL_ENV_VAR).ok();
        self.resolve_url_from(cli_url, env_url.as_deref())
    }

    fn resolve_url_from(&self, cli_url: Option<&str>, env_url: Option<&str>) -> String {
        cli_url
            .filter(|s| !s.is_empty())
            .or(env_url.filter(|s| !s.is_empty()))
            .or(self.url.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    pub fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout_secs = Some(secs);
    }
}
