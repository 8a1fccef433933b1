//! Ollama client implementation

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use crate::llm::core::{
    config::OllamaConfig, error::EngineError, provider::LlmProvider, types::CompletionRequest,
};

use super::mapper::{extract_text, to_generate_request};
use super::types::GenerateResponse;

/// Client for a local Ollama daemon
#[derive(Debug)]
pub struct OllamaClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Daemon base URL, e.g. "http://localhost:11434"
    base_url: String,
    /// Model to use
    model: String,
}

impl OllamaClient {
    /// Connect to the Ollama daemon
    ///
    /// Probes GET /api/tags to confirm the daemon is reachable. Probe
    /// failure is fatal: it is logged, then returned as a connection
    /// error.
    pub async fn connect(config: OllamaConfig) -> Result<Self, EngineError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| {
                EngineError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let client = Self {
            http_client,
            base_url: config.base_url,
            model: config.model,
        };

        if let Err(e) = client.probe().await {
            error!(
                "Failed to connect to Ollama at {}. Make sure the daemon is running \
                 and the model is available. Error: {}",
                client.base_url, e
            );
            return Err(e);
        }

        info!(
            "Successfully connected to Ollama at {} (model {})",
            client.base_url, client.model
        );
        Ok(client)
    }

    /// Readiness probe against the daemon's tag listing
    async fn probe(&self) -> Result<(), EngineError> {
        let url = format!("{}/api/tags", self.base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| EngineError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Connection(format!(
                "probe of {} returned status {}",
                url, status
            )));
        }
        Ok(())
    }

    /// Build the generate endpoint URL
    fn endpoint_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmProvider for OllamaClient {
    async fn generate(&self, request: CompletionRequest) -> Result<String, EngineError> {
        let generate_request = to_generate_request(&self.model, request);

        let response = self
            .http_client
            .post(self.endpoint_url())
            .json(&generate_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let generate_response: GenerateResponse = response.json().await?;
        Ok(extract_text(generate_response))
    }

    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
