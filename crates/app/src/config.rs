use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;
use tracing::Level;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` bundled into the binary so web builds need no filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

/// Environment variable that replaces `base_url` on native targets.
const BASE_URL_ENV: &str = "BADGE_BASE_URL";

/// Parse the bundled config and apply the environment override.
pub fn load_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::from_toml(EMBEDDED_CONFIG)?;
    match std::env::var(BASE_URL_ENV) {
        Ok(base_url) => config.with_base_url(base_url),
        Err(_) => Ok(config),
    }
}

/// Store the config for the rest of the process. Only the first call has effect.
pub fn install(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("config already installed; ignoring replacement");
    }
}

/// The installed config, or defaults if `install` hasn't run.
pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Map a config `log_level` string to a tracing level, falling back to INFO.
pub fn log_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}
