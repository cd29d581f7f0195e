//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid AI timeout (must be 1-120 seconds)")]
    InvalidAiTimeout,

    #[error("Invalid sampling temperature (must be 0.0-2.0)")]
    InvalidTemperature,

    #[error("Invalid max_tokens (must be positive)")]
    InvalidMaxTokens,

    #[error("Invalid AI base URL format")]
    InvalidBaseUrl,

    #[error("Model path must not be empty")]
    EmptyModelPath,

    #[error("Request timeout ({request_secs}s) must exceed the AI timeout ({ai_secs}s)")]
    RequestTimeoutTooShort { request_secs: u64, ai_secs: u64 },
}
