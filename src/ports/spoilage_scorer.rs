//! Spoilage Scorer Port - turns storage conditions into a shelf-life estimate.
//!
//! Scorers are built once at startup (a trained model is loaded from disk
//! at that point) and shared across requests, so `score` takes `&self` and
//! must not mutate anything.

use crate::domain::foundation::ValidationError;
use crate::domain::spoilage::{SensorHistory, SensorReading, SpoilageAssessment};

/// Port for spoilage risk and remaining-life estimation.
pub trait SpoilageScorer: Send + Sync {
    /// Estimates risk and remaining days for one reading.
    fn score(&self, reading: &SensorReading) -> Result<SpoilageAssessment, ScoringError>;

    /// Estimates risk and remaining days for a history of samples.
    ///
    /// Defaults to scoring the averaged reading.
    fn score_history(&self, history: &SensorHistory) -> Result<SpoilageAssessment, ScoringError> {
        self.score(&history.to_reading()?)
    }

    /// Short name used in logs and the status endpoint.
    fn name(&self) -> &'static str;
}

/// Spoilage scoring errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// The model was never trained on this produce type.
    #[error("unknown produce type: {0}")]
    UnknownProduce(String),

    /// The reading or the model output violated a domain constraint.
    #[error("invalid value: {0}")]
    Invalid(#[from] ValidationError),

    /// The model file could not be read or decoded.
    #[error("failed to load model from {path}: {reason}")]
    ModelLoad {
        /// Path of the model file.
        path: String,
        /// What went wrong.
        reason: String,
    },

    /// The model file decoded but its shape is inconsistent.
    #[error("invalid model: {0}")]
    InvalidModel(String),
}

impl ScoringError {
    /// Creates a model load error.
    pub fn model_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the caller supplied something the scorer cannot handle.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScoringError::UnknownProduce(_) | ScoringError::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_error_displays_correctly() {
        assert_eq!(
            ScoringError::UnknownProduce("Durian".into()).to_string(),
            "unknown produce type: Durian"
        );
        assert_eq!(
            ScoringError::model_load("/models/spoilage.json", "not found").to_string(),
            "failed to load model from /models/spoilage.json: not found"
        );
    }

    #[test]
    fn client_errors_are_classified() {
        assert!(ScoringError::UnknownProduce("x".into()).is_client_error());
        assert!(ScoringError::from(ValidationError::empty_field("produce")).is_client_error());
        assert!(!ScoringError::InvalidModel("bad".into()).is_client_error());
    }
}
