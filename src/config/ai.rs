//! Text generator configuration

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

/// Text generator configuration
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// Hugging Face access token
    pub hf_token: Option<String>,

    /// Model identifier passed to the endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the chat-completion API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Output token cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// How priorities are decided
    #[serde(default)]
    pub decision_mode: DecisionMode,
}

/// Decision strategy selector
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecisionMode {
    #[default]
    Llm,
    Rules,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a token is configured
    pub fn has_token(&self) -> bool {
        self.hf_token.as_ref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Validate text generator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.decision_mode == DecisionMode::Llm && !self.has_token() {
            return Err(ValidationError::MissingRequired("HF_TOKEN"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if !self.temperature.is_finite() || !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("hf_token", &self.hf_token.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("decision_mode", &self.decision_mode)
            .finish()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            hf_token: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            decision_mode: DecisionMode::default(),
        }
    }
}

fn default_model() -> String {
    "meta-llama/Meta-Llama-3-8B-Instruct".to_string()
}

fn default_base_url() -> String {
    "https://router.huggingface.co/v1".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_tokens() -> u32 {
    200
}
