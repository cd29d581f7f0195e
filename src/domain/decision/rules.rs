//! The dispatch business rule.

use crate::domain::foundation::{Confidence, Priority};

use super::{DecisionRecord, DecisionRequest};

/// Shelf life at or below which a batch is dispatched first.
pub const URGENT_DAYS: f64 = 2.0;

/// Shelf life at or below which a batch is dispatched soon.
pub const SOON_DAYS: f64 = 5.0;

/// Maps risk and remaining shelf life to a priority bucket.
///
/// `High risk OR days <= 2 -> P1`, `Medium risk OR days <= 5 -> P2`,
/// otherwise `P3`. Opaque risk labels only count through their days.
pub fn priority_for(request: &DecisionRequest) -> Priority {
    let days = request.remaining_days();
    if request.risk().is_high() || days <= URGENT_DAYS {
        Priority::P1
    } else if request.risk().is_medium() || days <= SOON_DAYS {
        Priority::P2
    } else {
        Priority::P3
    }
}

/// Standard warehouse action for a priority bucket.
pub fn action_for(priority: Priority) -> &'static str {
    match priority {
        Priority::P1 => "Dispatch Immediately",
        Priority::P2 => "Monitor Closely",
        Priority::P3 => "Maintain Storage",
        Priority::Unknown | Priority::Error => "Inspect batch manually",
    }
}

/// Decides locally with the business rule, without any generator.
pub fn decide_by_rules(request: &DecisionRequest) -> DecisionRecord {
    let priority = priority_for(request);
    DecisionRecord::new(priority, action_for(priority), Confidence::ONE)
}
