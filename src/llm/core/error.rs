//! Error types for the engine layer

use thiserror::Error;

/// Errors that can occur when configuring or using the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Missing or invalid settings; fatal at construction, never retried
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Local backend unreachable at the construction probe
    #[error("Connection error: {0}")]
    Connection(String),

    /// HTTP failure reported by the provider during a run
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// Provider payload that does not match the expected schema
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16()).unwrap_or(0);
        EngineError::Http {
            status,
            body: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::InvalidResponse(err.to_string())
    }
}
