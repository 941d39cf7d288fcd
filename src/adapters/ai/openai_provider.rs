//! OpenAI Provider - Implementation of AIProvider for OpenAI's chat completions API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-4o")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```
//!
//! One call is one HTTP request. Failures are mapped to `AIError` and handed
//! straight back; there is no retry loop.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication. May be empty; the service then answers 401.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Transport timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
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

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    ///
    /// # Errors
    ///
    /// - `Network` if the HTTP client cannot be constructed (TLS backend failure)
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Converts our request to OpenAI's format.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|msg| OpenAIMessage {
                    role: msg.role.as_str().to_string(),
                    content: msg.content.clone(),
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Sends a request.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let openai_request = self.to_openai_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(Self::error_for_status(status.as_u16(), &error_body))
    }

    /// Maps a non-success status and body to an error.
    fn error_for_status(status: u16, error_body: &str) -> AIError {
        match status {
            401 => AIError::AuthenticationFailed,
            429 => AIError::rate_limited(Self::parse_retry_after(error_body)),
            400 => AIError::InvalidRequest(error_body.to_string()),
            500..=599 => AIError::unavailable(format!("Server error {}: {}", status, error_body)),
            _ => AIError::network(format!("Unexpected status {}: {}", status, error_body)),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        // OpenAI sometimes says "try again in Xs"; default to 30 seconds otherwise
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(s) = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                if let Some(idx) = s.find("try again in ") {
                    let rest = &s[idx + 13..];
                    if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                        if let Ok(secs) = rest[..num_end].parse::<u32>() {
                            return secs;
                        }
                    }
                }
            }
        }
        30
    }

    /// Parses a successful response body.
    fn into_completion(openai_response: OpenAIResponse) -> Result<CompletionResponse, AIError> {
        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        let usage = openai_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        let content = choice
            .message
            .content
            .ok_or_else(|| AIError::parse("Response has no content"))?;

        Ok(CompletionResponse {
            content,
            usage,
            model: openai_response.model,
            finish_reason: FinishReason::from_wire(choice.finish_reason.as_deref()),
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            session_id = %request.metadata.session_id,
            model = %self.config.model,
            "Sending chat completion request"
        );

        let response = self.send_request(&request).await?;
        let response = Self::handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Self::into_completion(openai_response)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model)
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}


/// End-to-end over HTTP against a local axum stand-in for the completions API.
#[cfg(test)]
mod wire_tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::ports::{MessageRole, RequestMetadata};
    use axum::extract::State;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct Seen {
        authorization: Option<String>,
        body: serde_json::Value,
    }

    #[derive(Clone)]
    struct Stub {
        status: StatusCode,
        body: &'static str,
        seen: Arc<Mutex<Vec<Seen>>>,
    }

    async fn completions(
        State(stub): State<Stub>,
        headers: HeaderMap,
        body: String,
    ) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
        stub.seen.lock().unwrap().push(Seen {
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
        });
        (stub.status, [(header::CONTENT_TYPE, "application/json")], stub.body)
    }

    /// Serves one canned answer on an ephemeral port; returns the base URL.
    async fn serve(status: StatusCode, body: &'static str) -> (String, Arc<Mutex<Vec<Seen>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub {
            status,
            body,
            seen: seen.clone(),
        };
        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/v1", addr), seen)
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(SessionId::new(), "trace-wire"))
            .with_message(MessageRole::System, "facilitator")
            .with_message(MessageRole::User, "opinion")
            .with_max_tokens(1000)
            .with_temperature(0.7)
    }

    async fn complete_against(
        status: StatusCode,
        body: &'static str,
    ) -> (Result<CompletionResponse, AIError>, Vec<Seen>) {
        let (base_url, seen) = serve(status, body).await;
        let provider = OpenAIProvider::new(
            OpenAIConfig::new("sk-test")
                .with_base_url(base_url)
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();

        let result = provider.complete(request()).await;
        let seen = seen.lock().unwrap().clone();
        (result, seen)
    }

    const OK_BODY: &str = r#"{
        "model": "gpt-4o-2024-08-06",
        "choices": [{"message": {"role": "assistant", "content": "1. 분석"}, "finish_reason": "length"}],
        "usage": {"prompt_tokens": 40, "completion_tokens": 1000}
    }"#;

    #[tokio::test]
    async fn success_sends_bearer_and_json_body() {
        let (result, seen) = complete_against(StatusCode::OK, OK_BODY).await;

        let completion = result.unwrap();
        assert_eq!(completion.content, "1. 분석");
        assert_eq!(completion.finish_reason, FinishReason::Length);
        assert_eq!(completion.usage.total_tokens, 1040);

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].authorization.as_deref(), Some("Bearer sk-test"));
        let body = &seen[0].body;
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "facilitator");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "opinion");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_failed() {
        let (result, _) = complete_against(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"message":"Incorrect API key provided"}}"#,
        )
        .await;

        assert!(matches!(result, Err(AIError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn too_many_requests_maps_to_rate_limited() {
        let (result, seen) = complete_against(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"Rate limit reached. Please try again in 7s."}}"#,
        )
        .await;

        assert!(matches!(result, Err(AIError::RateLimited { retry_after_secs: 7 })));
        assert_eq!(seen.len(), 1, "no retry on rate limiting");
    }

    #[tokio::test]
    async fn server_error_maps_to_unavailable() {
        let (result, seen) =
            complete_against(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":{"message":"boom"}}"#).await;

        assert!(matches!(result, Err(AIError::Unavailable { .. })));
        assert_eq!(seen.len(), 1, "no retry on server errors");
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let (result, _) = complete_against(StatusCode::OK, "<html>gateway</html>").await;

        assert!(matches!(result, Err(AIError::Parse(_))));
    }

    #[tokio::test]
    async fn null_content_is_parse_error() {
        let (result, _) = complete_against(
            StatusCode::OK,
            r#"{"model": "gpt-4o", "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "content_filter"}]}"#,
        )
        .await;

        assert!(matches!(result, Err(AIError::Parse(_))));
    }

    #[tokio::test]
    async fn empty_choices_is_parse_error() {
        let (result, _) = complete_against(StatusCode::OK, r#"{"model": "gpt-4o", "choices": []}"#).await;

        assert!(matches!(result, Err(AIError::Parse(_))));
    }
}
