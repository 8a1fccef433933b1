//! OpenRouter-specific request and response types
//!
//! These types map directly to the OpenAI-dialect chat-completions schema
//! OpenRouter serves.

use serde::{Deserialize, Serialize};

/// Request body for POST /chat/completions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation turns: optional system turn, then one user turn
    pub messages: Vec<ChatMessage>,
    /// Always false; this client does not stream
    pub stream: bool,
}

/// A single chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system" or "user"
    pub role: String,
    /// Turn text
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body for POST /chat/completions
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices; may be empty
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token accounting, when the provider reports it
    pub usage: Option<ChatUsage>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

/// The assistant message inside a choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    /// Generated text; absent for some refusal/tool payloads
    pub content: Option<String>,
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
