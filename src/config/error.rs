//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Environment file {path} could not be loaded: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Session idle timeout must be at least one second")]
    InvalidSessionIdle,

    #[error("Invalid socket address {0}")]
    InvalidSocketAddr(String),

    #[error("AI model name must not be empty")]
    EmptyModel,

    #[error("AI base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("Invalid AI transport timeout")]
    InvalidAiTimeout,
}
