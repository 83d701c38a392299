//! Configuration management for the console
//!
//! Configuration comes from environment variables (with `.env` support via
//! `dotenvy`), validated before anything else is constructed.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;
use url::Url;

use crate::utils::error::{ConsoleError, Result};

/// Top-level configuration for the console core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Backend API settings
    pub api: ApiConfig,
    /// Login brute-force limiter settings
    pub login: LoginLimitConfig,
}

/// Backend API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, e.g. `https://poa.example.edu/api/v1/`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Settings for the login rate limiter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginLimitConfig {
    /// Failed attempts tolerated per window
    pub max_attempts: u32,
    /// Counting window in seconds
    pub window_secs: u64,
    /// Lockout length in seconds once tripped
    pub lockout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1/".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for LoginLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            window_secs: 300,
            lockout_secs: 60,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            login: LoginLimitConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file when present. Unset variables keep their defaults;
    /// set-but-unparseable values are configuration errors, not silent
    /// fallbacks.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(base_url) = env::var("POA_API_BASE_URL") {
            config.api.base_url = base_url;
        }
        if let Ok(timeout) = env::var("POA_API_TIMEOUT_SECS") {
            config.api.timeout_secs = timeout
                .parse()
                .map_err(|e| ConsoleError::config(format!("Invalid API timeout: {}", e)))?;
        }
        if let Ok(max_attempts) = env::var("POA_LOGIN_MAX_ATTEMPTS") {
            config.login.max_attempts = max_attempts
                .parse()
                .map_err(|e| ConsoleError::config(format!("Invalid login max attempts: {}", e)))?;
        }
        if let Ok(window) = env::var("POA_LOGIN_WINDOW_SECS") {
            config.login.window_secs = window
                .parse()
                .map_err(|e| ConsoleError::config(format!("Invalid login window: {}", e)))?;
        }
        if let Ok(lockout) = env::var("POA_LOGIN_LOCKOUT_SECS") {
            config.login.lockout_secs = lockout
                .parse()
                .map_err(|e| ConsoleError::config(format!("Invalid login lockout: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration before constructing anything from it.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)
            .map_err(|e| ConsoleError::config(format!("Invalid API base URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConsoleError::config(format!(
                "API base URL must be http(s), got {}",
                url.scheme()
            )));
        }
        if !self.api.base_url.ends_with('/') {
            return Err(ConsoleError::config(
                "API base URL must end with a trailing slash",
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConsoleError::config("API timeout must be positive"));
        }
        if self.login.max_attempts == 0 {
            return Err(ConsoleError::config("Login max attempts must be positive"));
        }
        Ok(())
    }
}
