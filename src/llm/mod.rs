//! LLM engine layer
//!
//! This module provides a unified interface over two interchangeable
//! backends: OpenRouter's hosted chat-completion API and a local Ollama
//! daemon. The backend is selected by configuration; callers see only
//! `Engine::run(prompt) -> text`.

pub mod core;
pub mod engine;
pub mod ollama;
pub mod openrouter;

// Re-export commonly used types
pub use core::{
    config::{BackendKind, EngineConfig, OllamaConfig, OpenRouterConfig},
    error::EngineError,
    provider::{create_provider, LlmProvider},
    types::CompletionRequest,
};
pub use engine::Engine;
