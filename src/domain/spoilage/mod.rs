//! Spoilage module - sensor readings and shelf-life estimates.

mod assessment;
mod reading;
mod threshold_rules;

pub use assessment::{round_days, SpoilageAssessment};
pub use reading::{SensorHistory, SensorReading, DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C};
pub use threshold_rules::{assess_by_thresholds, assess_history, THRESHOLD_CONFIDENCE};
