//! Provider trait and factory

use async_trait::async_trait;

use super::{config::EngineConfig, error::EngineError, types::CompletionRequest};
use crate::llm::ollama::OllamaClient;
use crate::llm::openrouter::OpenRouterClient;

/// Interface every backend client must satisfy
///
/// A provider performs exactly one blocking network call per `generate`
/// invocation and returns the model's text. Providers hold no per-call
/// mutable state, so one instance is safely shared across concurrent
/// callers.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a single-turn request and return the resulting text
    ///
    /// A response carrying no content yields an empty string, not an
    /// error.
    async fn generate(&self, request: CompletionRequest) -> Result<String, EngineError>;

    /// Short backend name for logs ("openrouter", "ollama")
    fn name(&self) -> &'static str;

    /// The model identifier this provider is bound to
    fn model_id(&self) -> &str;
}

/// Create the concrete provider a configuration selects
///
/// The OpenRouter variant makes no network call here; the Ollama variant
/// probes the daemon and fails construction when it is unreachable.
///
/// # Example
///
/// ```rust,no_run
/// use alfred::llm::{create_provider, EngineConfig, OllamaConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = EngineConfig::Ollama(OllamaConfig::resolve(None, None));
/// let provider = create_provider(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_provider(
    config: EngineConfig,
) -> Result<Box<dyn LlmProvider>, EngineError> {
    match config {
        EngineConfig::OpenRouter(config) => {
            let client = OpenRouterClient::new(config)?;
            Ok(Box::new(client))
        }
        EngineConfig::Ollama(config) => {
            let client = OllamaClient::connect(config).await?;
            Ok(Box::new(client))
        }
    }
}
