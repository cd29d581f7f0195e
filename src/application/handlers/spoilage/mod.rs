//! Spoilage handlers - batch analysis, prediction and priority decisions.

mod analyze_batch;
mod decide_priority;
mod predict_spoilage;

pub use analyze_batch::{AnalyzeBatchCommand, AnalyzeBatchError, AnalyzeBatchHandler, BatchAnalysis};
pub use decide_priority::{
    DecidePriorityHandler, DecisionStrategy, GenerationOptions, DEFAULT_MAX_TOKENS,
    DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT,
};
pub use predict_spoilage::PredictSpoilageHandler;
