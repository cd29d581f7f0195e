//! Output of a spoilage scorer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, RiskLevel, ValidationError};

/// Estimated spoilage risk and remaining shelf life for one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpoilageAssessment {
    pub risk: RiskLevel,
    pub remaining_days: f64,
    pub confidence: Confidence,
}

impl SpoilageAssessment {
    /// Creates an assessment, rounding remaining days to two decimals.
    pub fn new(
        risk: RiskLevel,
        remaining_days: f64,
        confidence: Confidence,
    ) -> Result<Self, ValidationError> {
        if !remaining_days.is_finite() {
            return Err(ValidationError::not_finite("remaining_days"));
        }
        if remaining_days < 0.0 {
            return Err(ValidationError::out_of_range(
                "remaining_days",
                0.0,
                f64::MAX,
                remaining_days,
            ));
        }

        Ok(Self {
            risk,
            remaining_days: round_days(remaining_days),
            confidence,
        })
    }
}

/// Rounds a day count to two decimal places.
pub fn round_days(days: f64) -> f64 {
    (days * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_rounds_remaining_days() {
        let assessment =
            SpoilageAssessment::new(RiskLevel::High, 1.23456, Confidence::new(0.7)).unwrap();
        assert_eq!(assessment.remaining_days, 1.23);
    }

    #[test]
    fn assessment_rejects_negative_days() {
        let result = SpoilageAssessment::new(RiskLevel::Low, -0.5, Confidence::ONE);
        assert!(result.is_err());
    }

    #[test]
    fn assessment_rejects_nan_days() {
        let result = SpoilageAssessment::new(RiskLevel::Low, f64::NAN, Confidence::ONE);
        assert!(matches!(result, Err(ValidationError::NotFinite { .. })));
    }
}
