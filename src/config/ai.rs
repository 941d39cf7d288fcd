//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::OpenAIConfig;

/// AI provider configuration
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key. Absence is tolerated; calls then fail with 401.
    pub openai_api_key: Option<String>,

    /// Chat model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an OpenAI key is configured
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Builds the adapter configuration. A missing key becomes an empty one.
    pub fn to_openai_config(&self) -> OpenAIConfig {
        OpenAIConfig::new(self.openai_api_key.clone().unwrap_or_default())
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    120
}
