//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text generator clients (Hugging Face, mock)
//! - `scoring` - Spoilage scorers (trained model file, thresholds)
//! - `http` - axum routes and server composition

pub mod ai;
pub mod http;
pub mod scoring;

pub use ai::{HuggingFaceConfig, HuggingFaceProvider, MockAIProvider};
pub use scoring::{ModelFileScorer, ThresholdScorer};
