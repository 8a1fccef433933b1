//! The engine wrapper
//!
//! An `Engine` owns exactly one provider for its lifetime and exposes a
//! single `run(prompt) -> text` operation. It keeps no conversation
//! memory and no cache, so one instance is safely shared across
//! concurrent callers.

use tracing::info;

use super::core::{
    config::EngineConfig,
    error::EngineError,
    provider::{create_provider, LlmProvider},
    types::CompletionRequest,
};

/// Wrapper around a single LLM provider connection
pub struct Engine {
    provider: Box<dyn LlmProvider>,
    system: Option<String>,
}

impl Engine {
    /// Construct an engine from a resolved configuration
    ///
    /// Builds the provider through the factory and logs a readiness
    /// line. For the Ollama backend this includes the construction
    /// probe; a probe failure fails construction outright.
    pub async fn connect(config: EngineConfig) -> Result<Self, EngineError> {
        let provider = create_provider(config).await?;
        info!(
            "Engine ready (backend {}, model {})",
            provider.name(),
            provider.model_id()
        );
        Ok(Self {
            provider,
            system: None,
        })
    }

    /// Construct an engine around an already-built provider
    ///
    /// Used by tests and embedders that inject their own provider.
    pub fn from_provider(provider: Box<dyn LlmProvider>) -> Self {
        Self {
            provider,
            system: None,
        }
    }

    /// Attach a system prompt sent ahead of every run
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Send one prompt as a single user turn and return the text
    ///
    /// One outbound call per invocation: no retries, no timeout, no
    /// streaming. A provider response with no content comes back as an
    /// empty string.
    pub async fn run(&self, prompt: &str) -> Result<String, EngineError> {
        let mut request = CompletionRequest::new(prompt);
        if let Some(system) = &self.system {
            request = request.with_system(system.clone());
        }
        self.provider.generate(request).await
    }

    /// The model identifier the engine is bound to
    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// The backend name the engine is bound to
    pub fn backend(&self) -> &'static str {
        self.provider.name()
    }
}
