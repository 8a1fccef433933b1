//! Mapping between the engine request type and the Ollama wire format

use crate::llm::core::types::CompletionRequest;

use super::types::{GenerateRequest, GenerateResponse};

/// Convert an engine request to an Ollama generate request
pub fn to_generate_request(model: &str, request: CompletionRequest) -> GenerateRequest {
    GenerateRequest {
        model: model.to_string(),
        prompt: request.prompt,
        system: request.system,
        stream: false,
    }
}

/// Extract the generated text, trimmed of surrounding whitespace
pub fn extract_text(response: GenerateResponse) -> String {
    response.response.trim().to_string()
}
