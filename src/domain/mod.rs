//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects and errors (risk, priority, confidence)
//! - `spoilage` - Sensor readings, shelf-life estimates, threshold rules
//! - `decision` - Dispatch rule, generator prompt, decision extraction

pub mod decision;
pub mod foundation;
pub mod spoilage;
