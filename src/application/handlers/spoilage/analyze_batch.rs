//! AnalyzeBatchHandler - Score a sensor reading and decide what to do with it

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::decide_priority::DecidePriorityHandler;
use crate::domain::decision::{DecisionRecord, DecisionRequest};
use crate::domain::foundation::RiskLevel;
use crate::domain::spoilage::SensorReading;
use crate::ports::{ScoringError, SpoilageScorer};

/// Command to analyze one batch
#[derive(Debug, Clone)]
pub struct AnalyzeBatchCommand {
    pub batch_id: Option<String>,
    pub reading: SensorReading,
}

/// Spoilage estimate merged with the dispatch decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    pub produce: String,
    pub spoilage_risk: RiskLevel,
    pub remaining_days: f64,
    #[serde(flatten)]
    pub decision: DecisionRecord,
}

/// Error type for batch analysis
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzeBatchError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Handler for batch analysis
pub struct AnalyzeBatchHandler {
    scorer: Arc<dyn SpoilageScorer>,
    decider: DecidePriorityHandler,
}

impl AnalyzeBatchHandler {
    pub fn new(scorer: Arc<dyn SpoilageScorer>, decider: DecidePriorityHandler) -> Self {
        Self { scorer, decider }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeBatchCommand,
    ) -> Result<BatchAnalysis, AnalyzeBatchError> {
        // 1. Estimate risk and remaining life
        let assessment = self.scorer.score(&cmd.reading)?;

        // 2. Decide dispatch priority; failures come back as records
        let request = DecisionRequest::new(
            cmd.reading.produce(),
            assessment.risk.clone(),
            assessment.remaining_days,
        )
        .map_err(ScoringError::from)?;
        let decision = self.decider.handle(&request).await;

        tracing::info!(
            batch_id = cmd.batch_id.as_deref().unwrap_or("-"),
            produce = cmd.reading.produce(),
            scorer = self.scorer.name(),
            risk = %assessment.risk,
            remaining_days = assessment.remaining_days,
            priority = %decision.priority,
            "Batch analyzed"
        );

        // 3. Merge
        Ok(BatchAnalysis {
            batch_id: cmd.batch_id,
            produce: cmd.reading.produce().to_string(),
            spoilage_risk: assessment.risk,
            remaining_days: assessment.remaining_days,
            decision,
        })
    }
}
