//! Mapping between the engine request type and the OpenRouter wire format

use crate::llm::core::types::CompletionRequest;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Convert an engine request to an OpenRouter chat-completion request
pub fn to_chat_request(model: &str, request: CompletionRequest) -> ChatCompletionRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = request.system {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(request.prompt));

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        stream: false,
    }
}

/// Extract the generated text from a chat-completion response
///
/// A response with no choices, or a choice carrying no content, yields an
/// empty string.
pub fn extract_text(response: ChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}
