//! PredictSpoilageHandler - Estimate spoilage from a history of sensor samples

use std::sync::Arc;

use crate::domain::spoilage::{SensorHistory, SpoilageAssessment};
use crate::ports::{ScoringError, SpoilageScorer};

/// Handler for history-based spoilage prediction
pub struct PredictSpoilageHandler {
    scorer: Arc<dyn SpoilageScorer>,
}

impl PredictSpoilageHandler {
    pub fn new(scorer: Arc<dyn SpoilageScorer>) -> Self {
        Self { scorer }
    }

    pub fn handle(&self, history: &SensorHistory) -> Result<SpoilageAssessment, ScoringError> {
        self.scorer.score_history(history)
    }
}
