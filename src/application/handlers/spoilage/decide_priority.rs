//! DecidePriorityHandler - Turn a spoilage estimate into a dispatch priority

use std::sync::Arc;
use std::time::Duration;

use crate::domain::decision::{
    decide_by_rules, decision_prompt, extract_decision, DecisionRecord, DecisionRequest,
    SYSTEM_PROMPT,
};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    RequestMetadata,
};

/// Sampling temperature used for decision prompts.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Output token cap for decision replies.
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Upper bound on one generator call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How the priority is decided.
#[derive(Clone)]
pub enum DecisionStrategy {
    /// Ask the text generator and extract its answer.
    Llm(Arc<dyn AIProvider>),
    /// Evaluate the business rule locally.
    Rules,
}

impl DecisionStrategy {
    /// Name reported by the status endpoint.
    pub fn mode(&self) -> &'static str {
        match self {
            DecisionStrategy::Llm(_) => "llm",
            DecisionStrategy::Rules => "rules",
        }
    }
}

impl std::fmt::Debug for DecisionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionStrategy::Llm(provider) => f
                .debug_tuple("Llm")
                .field(&provider.provider_info())
                .finish(),
            DecisionStrategy::Rules => f.write_str("Rules"),
        }
    }
}

/// Generation parameters for the generator call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Handler for priority decisions.
///
/// Never fails: a failed generator call becomes an `Error` record and an
/// unusable reply becomes an `Unknown` record.
pub struct DecidePriorityHandler {
    strategy: DecisionStrategy,
    options: GenerationOptions,
}

impl DecidePriorityHandler {
    pub fn new(strategy: DecisionStrategy, options: GenerationOptions) -> Self {
        Self { strategy, options }
    }

    pub async fn handle(&self, request: &DecisionRequest) -> DecisionRecord {
        match &self.strategy {
            DecisionStrategy::Rules => decide_by_rules(request),
            DecisionStrategy::Llm(provider) => match self.ask(provider.as_ref(), request).await {
                Ok(reply) => {
                    tracing::debug!(
                        model = %reply.model,
                        prompt_tokens = reply.usage.prompt_tokens,
                        completion_tokens = reply.usage.completion_tokens,
                        total_tokens = reply.usage.total_tokens,
                        "Decision reply received"
                    );
                    match reply.finish_reason {
                        FinishReason::Length => tracing::warn!(
                            produce = request.produce(),
                            max_tokens = self.options.max_tokens,
                            "Decision reply cut off at the token cap"
                        ),
                        FinishReason::ContentFilter => tracing::warn!(
                            produce = request.produce(),
                            "Decision reply withheld by content filter"
                        ),
                        FinishReason::Stop => {}
                    }
                    extract_decision(&reply.content)
                }
                Err(err) => {
                    tracing::warn!(
                        produce = request.produce(),
                        error = %err,
                        "Decision call failed"
                    );
                    DecisionRecord::transport_failure(err.to_string())
                }
            },
        }
    }

    /// Sends the decision prompt and returns the raw completion.
    async fn ask(
        &self,
        provider: &dyn AIProvider,
        request: &DecisionRequest,
    ) -> Result<CompletionResponse, AIError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let completion = CompletionRequest::new(RequestMetadata::new(trace_id.clone()))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, decision_prompt(request))
            .with_temperature(self.options.temperature)
            .with_max_tokens(self.options.max_tokens);

        tracing::debug!(
            trace_id = %trace_id,
            produce = request.produce(),
            risk = %request.risk(),
            remaining_days = request.remaining_days(),
            "Requesting decision"
        );

        tokio::time::timeout(self.options.timeout, provider.complete(completion))
            .await
            .map_err(|_| AIError::Timeout {
                timeout_secs: self.options.timeout.as_secs(),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::foundation::{Confidence, Priority, RiskLevel};

    fn tomato_request() -> DecisionRequest {
        DecisionRequest::new("Tomato", RiskLevel::High, 1.0).unwrap()
    }

    fn llm_handler(provider: MockAIProvider) -> DecidePriorityHandler {
        DecidePriorityHandler::new(
            DecisionStrategy::Llm(Arc::new(provider)),
            GenerationOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_decide_extracts_reply() {
        let provider = MockAIProvider::new().with_response(
            "Sure! {\"priority\":\"P1\",\"recommended_action\":\"Dispatch now\",\"confidence\":0.9}",
        );
        let handler = llm_handler(provider);

        let record = handler.handle(&tomato_request()).await;

        assert_eq!(
            record,
            DecisionRecord::new(Priority::P1, "Dispatch now", Confidence::new(0.9))
        );
    }

    #[tokio::test]
    async fn test_decide_sends_prompt_and_options() {
        let provider = MockAIProvider::new();
        let handler = llm_handler(provider.clone());

        handler.handle(&tomato_request()).await;

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.system_prompt.as_deref(), Some(SYSTEM_PROMPT));
        assert_eq!(call.temperature, Some(0.1));
        assert_eq!(call.max_tokens, Some(200));
        assert_eq!(call.messages.len(), 1);
        assert_eq!(call.messages[0].role, MessageRole::User);
        assert_eq!(call.messages[0].content, decision_prompt(&tomato_request()));
        assert!(!call.metadata.trace_id.is_empty());
    }

    #[tokio::test]
    async fn test_decide_transport_failure_becomes_error_record() {
        let provider =
            MockAIProvider::new().with_error(AIError::network("connection refused"));
        let handler = llm_handler(provider);

        let record = handler.handle(&tomato_request()).await;

        assert_eq!(record.priority, Priority::Error);
        assert_eq!(record.recommended_action, "network error: connection refused");
        assert_eq!(record.confidence, Some(Confidence::ZERO));
    }

    #[tokio::test]
    async fn test_decide_auth_failure_becomes_error_record() {
        let provider = MockAIProvider::new().with_error(AIError::AuthenticationFailed);
        let handler = llm_handler(provider);

        let record = handler.handle(&tomato_request()).await;

        assert_eq!(record.priority, Priority::Error);
        assert!(!record.recommended_action.is_empty());
    }

    #[tokio::test]
    async fn test_decide_garbage_reply_becomes_unknown_record() {
        let provider = MockAIProvider::new().with_response("I think you should ship it soon.");
        let handler = llm_handler(provider);

        let record = handler.handle(&tomato_request()).await;

        assert_eq!(record, DecisionRecord::invalid_response());
    }

    #[tokio::test]
    async fn test_decide_truncated_reply_becomes_unknown_record() {
        let provider = MockAIProvider::new()
            .with_truncated_response("{\"priority\":\"P1\",\"recommended_action\":\"Dispa");
        let handler = llm_handler(provider);

        let record = handler.handle(&tomato_request()).await;

        assert_eq!(record, DecisionRecord::invalid_response());
    }

    #[tokio::test]
    async fn test_decide_truncated_reply_with_whole_object_still_extracts() {
        let provider = MockAIProvider::new().with_truncated_response(
            "{\"priority\":\"P2\",\"recommended_action\":\"Monitor\"} and then some",
        );
        let handler = llm_handler(provider);

        let record = handler.handle(&tomato_request()).await;

        assert_eq!(record.priority, Priority::P2);
        assert_eq!(record.recommended_action, "Monitor");
    }

    #[tokio::test(start_paused = true)]
    async fn test_decide_times_out() {
        let provider = MockAIProvider::new().with_delay(Duration::from_secs(60));
        let handler = DecidePriorityHandler::new(
            DecisionStrategy::Llm(Arc::new(provider)),
            GenerationOptions {
                timeout: Duration::from_secs(2),
                ..GenerationOptions::default()
            },
        );

        let record = handler.handle(&tomato_request()).await;

        assert_eq!(record.priority, Priority::Error);
        assert_eq!(record.recommended_action, "request timed out after 2s");
    }

    #[tokio::test]
    async fn test_rules_strategy_skips_generator() {
        let handler =
            DecidePriorityHandler::new(DecisionStrategy::Rules, GenerationOptions::default());

        let record = handler.handle(&tomato_request()).await;

        assert_eq!(
            record,
            DecisionRecord::new(Priority::P1, "Dispatch Immediately", Confidence::ONE)
        );
    }

    #[test]
    fn test_strategy_mode_names() {
        let llm = DecisionStrategy::Llm(Arc::new(MockAIProvider::new()));
        assert_eq!(llm.mode(), "llm");
        assert_eq!(DecisionStrategy::Rules.mode(), "rules");
    }
}
