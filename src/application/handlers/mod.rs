//! Application handlers.
//!
//! Handlers that orchestrate domain operations over the ports.

pub mod spoilage;

pub use spoilage::{
    AnalyzeBatchCommand, AnalyzeBatchError, AnalyzeBatchHandler, BatchAnalysis,
    DecidePriorityHandler, DecisionStrategy, GenerationOptions, PredictSpoilageHandler,
};
