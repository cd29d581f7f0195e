//! Application layer - Handlers that coordinate domain logic and ports.

pub mod handlers;

pub use handlers::{
    AnalyzeBatchCommand, AnalyzeBatchError, AnalyzeBatchHandler, BatchAnalysis,
    DecidePriorityHandler, DecisionStrategy, GenerationOptions, PredictSpoilageHandler,
};
