//! Process-wide API configuration
//!
//! The base URL is installed once at startup and read-only afterwards. Code
//! that runs before (or without) an explicit install sees the default.

use std::sync::OnceLock;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const API_URL_ENV: &str = "GROUPIE_API_URL";

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("API configuration was already installed")]
    AlreadyInstalled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Validate and normalize a base URL. Only http(s) URLs are accepted.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Build from an optional override, falling back to the default when unset or blank.
    pub fn from_override(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    /// Read `GROUPIE_API_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(API_URL_ENV).ok();
        Self::from_override(value.as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Install the process-wide configuration. Fails if one is already installed.
pub fn install(config: ApiConfig) -> Result<(), ConfigError> {
    let base_url = config.base_url.clone();
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    info!("API base URL set to {base_url}");
    Ok(())
}

/// The installed configuration, or the default if nothing was installed.
pub fn current() -> &'static ApiConfig {
    CONFIG.get_or_init(ApiConfig::default)
}
