//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `DILEMMA_DEBATE`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use dilemma_debate::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Points at an alternative dotenv file.
pub const ENV_FILE_VAR: &str = "DILEMMA_DEBATE_ENV_FILE";

/// Unprefixed key honoured when `DILEMMA_DEBATE__AI__OPENAI_API_KEY` is unset.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenAI configuration (key, model, endpoint, transport timeout)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads the file named by `DILEMMA_DEBATE_ENV_FILE`, or `.env` if present
    /// 2. Reads environment variables with the `DILEMMA_DEBATE` prefix
    /// 3. Falls back to `OPENAI_API_KEY` for the API key
    ///
    /// # Environment Variable Format
    ///
    /// - `DILEMMA_DEBATE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DILEMMA_DEBATE__AI__MODEL=gpt-4o-mini` -> `ai.model = gpt-4o-mini`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicitly named env file cannot be read
    /// or values cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(ENV_FILE_VAR) {
            Ok(path) => {
                dotenvy::from_path(&path).map_err(|source| ConfigError::EnvFile { path, source })?;
            }
            Err(_) => {
                dotenvy::dotenv().ok();
            }
        }

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DILEMMA_DEBATE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.ai.has_api_key() {
            config.ai.openai_api_key = std::env::var(OPENAI_API_KEY_VAR)
                .ok()
                .filter(|key| !key.is_empty());
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// A missing API key is not a validation failure; callers log it instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
