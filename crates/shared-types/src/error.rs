use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of badge builder errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    InvalidPattern,
    InvalidStyle,
    InvalidConfig,
    InvalidCatalog,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidPattern => write!(f, "InvalidPattern"),
            AppErrorKind::InvalidStyle => write!(f, "InvalidStyle"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            AppErrorKind::InvalidCatalog => write!(f, "InvalidCatalog"),
        }
    }
}

/// Structured error shared by the pattern parser, config and catalog loaders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidPattern,
            message: message.into(),
        }
    }

    pub fn invalid_style(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidStyle,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidCatalog,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::invalid_config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::invalid_catalog(err.to_string())
    }
}
