//! Shared test helpers

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use alfred::handlers::SharedEngine;
use alfred::llm::{CompletionRequest, Engine, EngineError, LlmProvider};

/// Provider stub answering with a fixed reply or a fixed error,
/// recording every prompt it sees
pub struct MockProvider {
    reply: Option<String>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// A provider that answers every request with `reply`
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider that fails every request with an HTTP 429 error
    pub fn failing() -> Self {
        Self {
            reply: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the prompts recorded so far
    pub fn seen(&self) -> Arc<Mutex<Vec<String>>> {
        self.seen.clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(&self, request: CompletionRequest) -> Result<String, EngineError> {
        self.seen.lock().unwrap().push(request.prompt);
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(EngineError::Http {
                status: 429,
                body: "quota exceeded".to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

/// A Ready facade state backed by the given provider
pub fn ready_engine(provider: MockProvider) -> SharedEngine {
    Arc::new(Some(Engine::from_provider(Box::new(provider))))
}

/// A Degraded facade state (engine construction failed at startup)
pub fn degraded_engine() -> SharedEngine {
    Arc::new(None)
}
