//! Spoilage Scorer Adapters.
//!
//! - `ModelFileScorer` - Trained linear models loaded from a JSON export
//! - `ThresholdScorer` - Fixed temperature/humidity thresholds

mod model_file_scorer;
mod threshold_scorer;

pub use model_file_scorer::{ModelFileScorer, SpoilageModel, FEATURE_COUNT};
pub use threshold_scorer::ThresholdScorer;
