//! Error types for the generation workflow.

use thiserror::Error;

/// Errors surfaced by the workflow controller, the backend client, and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Generation backend rejected the request: {0}")]
    BackendRejected(String),

    #[error("Requirement text is empty; nothing to submit")]
    EmptyRequirement,

    #[error("A generation request is already in flight")]
    Busy,

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
