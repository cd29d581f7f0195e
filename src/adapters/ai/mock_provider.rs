//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling the hosted inference endpoint.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"priority":"P1","recommended_action":"Dispatch","confidence":0.9}"#)
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Content returned once the configured queue is exhausted.
pub const DEFAULT_MOCK_CONTENT: &str =
    r#"{"priority": "P3", "recommended_action": "Maintain Storage", "confidence": 0.5}"#;

/// Mock AI provider for testing.
///
/// Configurable to return specific responses, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success { content: String },
    /// Return a completion cut off at the token cap.
    Truncated { content: String },
    /// Return an error.
    Error(AIError),
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
        })
    }

    /// Adds a response that stopped at the token cap.
    pub fn with_truncated_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Truncated {
            content: content.into(),
        })
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: AIError) -> Self {
        self.push(MockResponse::Error(error))
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.lock_calls().clone()
    }

    fn push(self, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(response);
        self
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<CompletionRequest>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: DEFAULT_MOCK_CONTENT.to_string(),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.lock_calls().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let (content, finish_reason) = match self.next_response() {
            MockResponse::Success { content } => (content, FinishReason::Stop),
            MockResponse::Truncated { content } => (content, FinishReason::Length),
            MockResponse::Error(err) => return Err(err),
        };

        Ok(CompletionResponse {
            content,
            usage: TokenUsage::new(10, 20),
            model: self.info.model.clone(),
            finish_reason,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MessageRole, RequestMetadata};

    fn test_request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new("trace-123"))
            .with_message(MessageRole::User, "Hello")
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_response() {
        let provider = MockAIProvider::new().with_response("Hello from mock!");

        let response = provider.complete(test_request()).await.unwrap();

        assert_eq!(response.content, "Hello from mock!");
        assert_eq!(response.model, "mock-model-1");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_response("Second");

        let r1 = provider.complete(test_request()).await.unwrap();
        let r2 = provider.complete(test_request()).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "Second");
    }

    #[tokio::test]
    async fn mock_provider_returns_default_after_exhausted() {
        let provider = MockAIProvider::new().with_response("Only one");

        provider.complete(test_request()).await.unwrap();
        let r2 = provider.complete(test_request()).await.unwrap();

        assert_eq!(r2.content, DEFAULT_MOCK_CONTENT);
    }

    #[tokio::test]
    async fn mock_provider_reports_truncated_response() {
        let provider = MockAIProvider::new().with_truncated_response("{\"priority\":");

        let response = provider.complete(test_request()).await.unwrap();

        assert_eq!(response.content, "{\"priority\":");
        assert_eq!(response.finish_reason, FinishReason::Length);
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider = MockAIProvider::new().with_error(AIError::rate_limited(30));

        let err = provider.complete(test_request()).await.unwrap_err();

        assert!(matches!(err, AIError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls() {
        let provider = MockAIProvider::new();
        assert_eq!(provider.call_count(), 0);

        provider.complete(test_request()).await.unwrap();
        provider.complete(test_request()).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.get_calls()[0].metadata.trace_id, "trace-123");
    }

    #[tokio::test]
    async fn mock_provider_clones_share_state() {
        let provider = MockAIProvider::new().with_response("shared");
        let clone = provider.clone();

        let response = clone.complete(test_request()).await.unwrap();

        assert_eq!(response.content, "shared");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_provider_respects_delay() {
        let provider = MockAIProvider::new()
            .with_response("Delayed response")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.complete(test_request()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
