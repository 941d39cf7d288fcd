//! Scripted AIProvider for tests and offline runs.
//!
//! Replies are queued up front and handed out one per `complete` call. Once
//! the script runs dry every call gets [`MockAIProvider::FALLBACK_REPLY`].
//! Each request is recorded so tests can inspect the prompt that was sent.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("1. 의견에 대한 분석 ...")
//!     .with_error(MockError::AuthenticationFailed);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Failure to script into the mock.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    Unavailable { message: String },
    /// What a missing or revoked API key produces.
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

type Script = VecDeque<Result<String, MockError>>;

/// Mock provider. Clones share one script and one call log, so a test can
/// keep a handle for assertions while the app owns another.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

// A test that panicked mid-call poisons the lock; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    /// Reply used once the script is exhausted.
    pub const FALLBACK_REPLY: &'static str = "Mock response";

    const MODEL: &'static str = "mock-model-1";

    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.script).push_back(Ok(content.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.script).push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Every request received so far, oldest first.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        lock(&self.calls).push(request);

        let next = lock(&self.script).pop_front();
        let content = next.unwrap_or_else(|| Ok(Self::FALLBACK_REPLY.to_string()))?;

        Ok(CompletionResponse {
            content,
            usage: TokenUsage::new(10, 20),
            model: Self::MODEL.to_string(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", Self::MODEL)
    }
}
