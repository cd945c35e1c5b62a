use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://img.shields.io";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so that an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the badge server, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validated()
    }

    /// Replace the base URL, e.g. from an environment override.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, AppError> {
        self.base_url = base_url.into();
        self.validated()
    }

    fn validated(mut self) -> Result<Self, AppError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AppError::invalid_config("base_url must not be empty"));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }
}
