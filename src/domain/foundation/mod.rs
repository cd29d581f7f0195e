//! Foundation module - Shared domain primitives.
//!
//! Value objects and error types that form the vocabulary of the
//! spoilage decision domain.

mod confidence;
mod errors;
mod priority;
mod risk_level;

pub use confidence::Confidence;
pub use errors::ValidationError;
pub use priority::Priority;
pub use risk_level::RiskLevel;
