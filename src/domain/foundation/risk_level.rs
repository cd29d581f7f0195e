//! Spoilage risk classification.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Categorical estimate of how urgently a batch is degrading.
///
/// Labels outside the three known levels are kept verbatim in `Other` so an
/// upstream scorer or caller can pass them through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Other(String),
}

impl RiskLevel {
    /// Returns true for the highest urgency level.
    pub fn is_high(&self) -> bool {
        matches!(self, RiskLevel::High)
    }

    /// Returns true for the middle urgency level.
    pub fn is_medium(&self) -> bool {
        matches!(self, RiskLevel::Medium)
    }

    /// Canonical label.
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Other(label) => label,
        }
    }
}

impl From<&str> for RiskLevel {
    fn from(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" | "moderate" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Other(label.to_string()),
        }
    }
}

impl From<String> for RiskLevel {
    fn from(label: String) -> Self {
        RiskLevel::from(label.as_str())
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RiskLevel::from(s))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
