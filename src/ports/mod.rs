//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Hosted text generation used for LLM decisions
//! - `SpoilageScorer` - Risk and shelf-life estimation from sensor readings

mod ai_provider;
mod spoilage_scorer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use spoilage_scorer::{ScoringError, SpoilageScorer};
