//! Spoilage scorer configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Spoilage scorer configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Trained model exported as JSON; thresholds are used when unset
    pub model_path: Option<String>,
}

impl ScoringConfig {
    /// Model path, if one is configured
    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref().map(Path::new)
    }

    /// Validate scorer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.model_path.as_deref() {
            Some(path) if path.trim().is_empty() => Err(ValidationError::EmptyModelPath),
            _ => Ok(()),
        }
    }
}
