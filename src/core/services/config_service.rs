//! Configuration service for managing application configuration

use crate::AppError;
use crate::error::ConfigError;
use crate::storage::config::Config;
use crate::utils::validation::validate_url;
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set a user-facing configuration key
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        match key {
            "url" => {
                validate_url(value)?;
                self.config.set_url(value.trim_end_matches('/').to_string());
            }
            "timeout_secs" => {
                let secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        field: key.to_string(),
                        value: value.to_string(),
                        reason: "expected a positive number of seconds".to_string(),
                    })?;
                self.config.set_timeout_secs(secs);
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }
}
