//! The decision handed back to callers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, Priority};

/// Action reported when the generator's reply held no usable decision.
pub const INVALID_RESPONSE_ACTION: &str = "Model returned invalid response";

/// Action reported when a transport failure carried no description.
pub const UNAVAILABLE_ACTION: &str = "Decision service unavailable";

/// A dispatch decision for one batch.
///
/// `confidence` is absent when the generator omitted it; it is never
/// defaulted on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub priority: Priority,
    pub recommended_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl DecisionRecord {
    /// Creates a record with a known confidence.
    pub fn new(
        priority: Priority,
        recommended_action: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            priority,
            recommended_action: recommended_action.into(),
            confidence: Some(confidence),
        }
    }

    /// Fallback for replies that could not be turned into a decision.
    pub fn invalid_response() -> Self {
        Self::new(Priority::Unknown, INVALID_RESPONSE_ACTION, Confidence::ZERO)
    }

    /// Fallback for a failed call to the generator.
    pub fn transport_failure(description: impl Into<String>) -> Self {
        let description = description.into();
        let action = if description.trim().is_empty() {
            UNAVAILABLE_ACTION.to_string()
        } else {
            description
        };
        Self::new(Priority::Error, action, Confidence::ZERO)
    }
}
