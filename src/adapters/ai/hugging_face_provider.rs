//! Hugging Face Provider - Implementation of AIProvider for hosted inference.
//!
//! Talks to the OpenAI-compatible chat-completions route of the Hugging Face
//! inference router, which serves instruction-tuned models such as
//! Llama 3 behind a bearer token.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HuggingFaceConfig::new(token)
//!     .with_model("meta-llama/Meta-Llama-3-8B-Instruct")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let provider = HuggingFaceProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Default hosted model.
pub const DEFAULT_MODEL: &str = "meta-llama/Meta-Llama-3-8B-Instruct";

/// Default inference router base URL.
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";

/// Configuration for the Hugging Face provider.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Access token for authentication.
    api_token: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HuggingFaceConfig {
    /// Creates a new configuration with the given access token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: Secret::new(api_token.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_token(&self) -> &str {
        self.api_token.expose_secret()
    }
}

/// Hugging Face inference provider implementation.
pub struct HuggingFaceProvider {
    config: HuggingFaceConfig,
    client: Client,
}

impl HuggingFaceProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: HuggingFaceConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to the chat-completions wire format.
    fn to_chat_request(&self, request: &CompletionRequest) -> ChatRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        if let Some(ref prompt) = request.system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: prompt.clone(),
            });
        }

        for msg in &request.messages {
            messages.push(ChatMessage {
                role: msg.role.as_str().to_string(),
                content: msg.content.clone(),
            });
        }

        ChatRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream: false,
        }
    }

    /// Sends a request.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let chat_request = self.to_chat_request(request);

        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_token())
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses onto provider errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), &error_body))
    }

    fn status_error(status: u16, error_body: &str) -> AIError {
        match status {
            401 | 403 => AIError::AuthenticationFailed,
            429 => AIError::rate_limited(Self::parse_retry_after(error_body)),
            400 | 404 | 422 => AIError::InvalidRequest(error_body.to_string()),
            500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
            _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
        }
    }

    /// Parses a retry hint from an error body, defaulting to 30 seconds.
    fn parse_retry_after(error_body: &str) -> u32 {
        serde_json::from_str::<serde_json::Value>(error_body)
            .ok()
            .and_then(|v| v.get("estimated_time").and_then(|t| t.as_f64()))
            .map(|secs| secs.ceil().max(1.0) as u32)
            .unwrap_or(30)
    }

    /// Parses a successful response.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Self::into_completion(chat_response, &self.config.model)
    }

    fn into_completion(
        chat_response: ChatResponse,
        fallback_model: &str,
    ) -> Result<CompletionResponse, AIError> {
        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        let usage = chat_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            usage,
            model: chat_response
                .model
                .unwrap_or_else(|| fallback_model.to_string()),
            finish_reason: FinishReason::from_provider(choice.finish_reason.as_deref()),
        })
    }
}

#[async_trait]
impl AIProvider for HuggingFaceProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "Requesting chat completion"
        );

        let response = self.send_request(&request).await?;
        let completion = self.parse_response(response).await?;

        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            total_tokens = completion.usage.total_tokens,
            "Chat completion received"
        );

        Ok(completion)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("huggingface", &self.config.model)
    }
}

// ----- Chat Completions API Types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: Option<String>,
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
