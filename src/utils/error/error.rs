//! Error handling for the console core
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the console core
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Main error type for the console core
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Role catalog load failures (network error, non-2xx status, unparseable body)
    #[error("Role catalog error: {0}")]
    RoleCatalog(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unexpected API responses
    #[error("API error: {0}")]
    Api(String),

    /// Login attempt rejected by the brute-force limiter
    #[error("Too many failed login attempts, retry in {0} seconds")]
    RateLimited(u64),
}

impl ConsoleError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn role_catalog<S: Into<String>>(message: S) -> Self {
        Self::RoleCatalog(message.into())
    }

    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api(message.into())
    }

    /// Whether retrying the failed operation could succeed without a code or
    /// configuration change. Drives the retry affordance on the blocking
    /// bootstrap screen.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::HttpClient(_) | Self::RoleCatalog(_) | Self::Api(_) | Self::RateLimited(_)
        )
    }
}
