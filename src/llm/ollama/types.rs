//! Ollama-specific request and response types
//!
//! These types map directly to the Ollama daemon's /api/generate schema.

use serde::{Deserialize, Serialize};

/// Request body for POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier
    pub model: String,
    /// The user prompt
    pub prompt: String,
    /// Optional system prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Always false; this client does not stream
    pub stream: bool,
}

/// Response body for POST /api/generate
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated text
    #[serde(default)]
    pub response: String,
}
