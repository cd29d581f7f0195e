//! Input to a priority decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RiskLevel, ValidationError};

/// What the decider knows about a batch: produce, risk and shelf life left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    produce: String,
    risk: RiskLevel,
    remaining_days: f64,
}

impl DecisionRequest {
    /// Creates a validated request.
    pub fn new(
        produce: impl Into<String>,
        risk: RiskLevel,
        remaining_days: f64,
    ) -> Result<Self, ValidationError> {
        let produce = produce.into().trim().to_string();
        if produce.is_empty() {
            return Err(ValidationError::empty_field("produce"));
        }
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
            produce,
            risk,
            remaining_days,
        })
    }

    pub fn produce(&self) -> &str {
        &self.produce
    }

    pub fn risk(&self) -> &RiskLevel {
        &self.risk
    }

    pub fn remaining_days(&self) -> f64 {
        self.remaining_days
    }
}
