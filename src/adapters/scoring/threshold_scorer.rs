//! Rule-of-thumb scorer used when no trained model is configured.

use crate::domain::spoilage::{
    assess_by_thresholds, assess_history, SensorHistory, SensorReading, SpoilageAssessment,
};
use crate::ports::{ScoringError, SpoilageScorer};

/// Scores readings with the fixed temperature/humidity thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdScorer;

impl ThresholdScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SpoilageScorer for ThresholdScorer {
    fn score(&self, reading: &SensorReading) -> Result<SpoilageAssessment, ScoringError> {
        Ok(assess_by_thresholds(reading))
    }

    fn score_history(&self, history: &SensorHistory) -> Result<SpoilageAssessment, ScoringError> {
        Ok(assess_history(history))
    }

    fn name(&self) -> &'static str {
        "thresholds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RiskLevel;

    #[test]
    fn scores_any_produce() {
        let scorer = ThresholdScorer::new();
        let reading = SensorReading::new("Dragonfruit", 22.0, 40.0, 2).unwrap();

        let assessment = scorer.score(&reading).unwrap();

        assert_eq!(assessment.risk, RiskLevel::High);
        assert_eq!(assessment.remaining_days, 2.0);
    }

    #[test]
    fn history_uses_the_tomato_rule() {
        let scorer = ThresholdScorer::new();
        let history = SensorHistory {
            temperature_history: vec![25.0],
            produce_type: "Banana".to_string(),
            ..SensorHistory::default()
        };

        let assessment = scorer.score_history(&history).unwrap();

        assert_eq!(assessment.risk, RiskLevel::Low);
        assert_eq!(assessment.remaining_days, 15.0);
    }

    #[test]
    fn history_without_produce_is_accepted() {
        let assessment = ThresholdScorer::new()
            .score_history(&SensorHistory::default())
            .unwrap();

        assert_eq!(assessment.risk, RiskLevel::Low);
    }

    #[test]
    fn reports_name() {
        assert_eq!(ThresholdScorer::new().name(), "thresholds");
    }
}
