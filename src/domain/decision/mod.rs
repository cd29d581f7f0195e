//! Decision module - turning a spoilage estimate into a dispatch priority.
//!
//! Holds the business rule, the prompt given to the text generator and the
//! extractor that recovers a [`DecisionRecord`] from the generator's reply.

mod extractor;
mod prompt;
mod record;
mod request;
mod rules;

pub use extractor::{extract_decision, try_extract, ExtractionError};
pub use prompt::{decision_prompt, SYSTEM_PROMPT};
pub use record::{DecisionRecord, INVALID_RESPONSE_ACTION, UNAVAILABLE_ACTION};
pub use request::DecisionRequest;
pub use rules::{action_for, decide_by_rules, priority_for, SOON_DAYS, URGENT_DAYS};
