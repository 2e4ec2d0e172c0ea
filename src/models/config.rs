//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Retry and backoff behavior
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        if !path.as_ref().exists() {
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if let Err(e) = url::Url::parse(&self.api.base_url) {
            return Err(AppError::validation(format!(
                "api.base_url is not a valid URL: {e}"
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

/// API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL that query suffixes are appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Retry and backoff behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Attempt budget for unexpected network errors
    #[serde(default = "defaults::attempts")]
    pub attempts: u32,

    /// Delay before retrying a failed request, in milliseconds
    #[serde(default = "defaults::retry_delay")]
    pub retry_delay_ms: u64,

    /// Delay after a rate-limited response, in milliseconds
    #[serde(default = "defaults::rate_limit_delay")]
    pub rate_limit_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: defaults::attempts(),
            retry_delay_ms: defaults::retry_delay(),
            rate_limit_delay_ms: defaults::rate_limit_delay(),
        }
    }
}

mod defaults {
    // API defaults
    pub fn base_url() -> String {
        "http://codeforces.com/api/".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; tagstat/0.1)".into()
    }
    pub fn timeout() -> u64 {
        5
    }

    // Retry defaults
    pub fn attempts() -> u32 {
        4
    }
    pub fn retry_delay() -> u64 {
        1000
    }
    pub fn rate_limit_delay() -> u64 {
        500
    }
}
