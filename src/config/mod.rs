//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AGRIFRESH` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use agrifresh::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod scoring;
mod server;

pub use ai::{AiConfig, DecisionMode};
pub use error::{ConfigError, ValidationError};
pub use scoring::ScoringConfig;
pub use server::{Environment, ServerConfig, DEFAULT_CORS_ORIGINS};

use serde::Deserialize;

/// Plain variable consulted when `AGRIFRESH__AI__HF_TOKEN` is unset.
pub const HF_TOKEN_VAR: &str = "HF_TOKEN";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Text generator configuration (token, model, sampling)
    #[serde(default)]
    pub ai: AiConfig,

    /// Spoilage scorer configuration (model file)
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AGRIFRESH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    /// 5. Falls back to `HF_TOKEN` for the generator token
    ///
    /// # Environment Variable Format
    ///
    /// - `AGRIFRESH__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AGRIFRESH__AI__DECISION_MODE=rules` -> `ai.decision_mode = rules`
    /// - `AGRIFRESH__SCORING__MODEL_PATH=...` -> `scoring.model_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("AGRIFRESH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.ai.has_token() {
            config.ai.hf_token = std::env::var(HF_TOKEN_VAR)
                .ok()
                .filter(|token| !token.trim().is_empty());
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.scoring.validate()?;

        // The decision call must resolve before the router cancels the request.
        if self.ai.decision_mode == DecisionMode::Llm
            && self.server.request_timeout_secs <= self.ai.timeout_secs
        {
            return Err(ValidationError::RequestTimeoutTooShort {
                request_secs: self.server.request_timeout_secs,
                ai_secs: self.ai.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
