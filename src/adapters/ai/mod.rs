//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `HuggingFaceProvider` - Hosted chat completions (Llama 3 by default)
//! - `MockAIProvider` - Configurable mock for testing

mod hugging_face_provider;
mod mock_provider;

pub use hugging_face_provider::{
    HuggingFaceConfig, HuggingFaceProvider, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use mock_provider::{MockAIProvider, MockResponse, DEFAULT_MOCK_CONTENT};
