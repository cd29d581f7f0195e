//! Dispatch priority buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Dispatch urgency of a batch.
///
/// `P1` is the most urgent. `Unknown` and `Error` mark decisions that could
/// not be recovered from the generator or could not be requested at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    Unknown,
    Error,
}

impl Priority {
    /// All values, most urgent first.
    pub const ALL: [Priority; 5] = [
        Priority::P1,
        Priority::P2,
        Priority::P3,
        Priority::Unknown,
        Priority::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
            Priority::Unknown => "Unknown",
            Priority::Error => "Error",
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                if trimmed.is_empty() {
                    ValidationError::empty_field("priority")
                } else {
                    ValidationError::unsupported("priority", trimmed)
                }
            })
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
