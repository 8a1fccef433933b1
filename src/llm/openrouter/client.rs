//! OpenRouter client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::debug;

use crate::llm::core::{
    config::OpenRouterConfig, error::EngineError, provider::LlmProvider,
    types::CompletionRequest,
};

use super::mapper::{extract_text, to_chat_request};
use super::types::ChatCompletionResponse;

/// Client for the OpenRouter chat-completions API
#[derive(Debug)]
pub struct OpenRouterClient {
    /// HTTP client with the optional attribution headers pre-attached
    http_client: Client,
    /// API base URL, e.g. "https://openrouter.ai/api/v1"
    base_url: String,
    /// Bearer credential
    api_key: String,
    /// Model to use
    model: String,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client
    ///
    /// Construction makes no network call. The optional site URL and
    /// application name become HTTP-Referer and X-Title default headers
    /// on every request.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a header value cannot be
    /// encoded or the HTTP client cannot be built.
    pub fn new(config: OpenRouterConfig) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        if let Some(site_url) = &config.site_url {
            headers.insert(
                "HTTP-Referer",
                HeaderValue::from_str(site_url).map_err(|e| {
                    EngineError::Configuration(format!("Invalid site URL header: {}", e))
                })?,
            );
        }
        if let Some(app_name) = &config.app_name {
            headers.insert(
                "X-Title",
                HeaderValue::from_str(app_name).map_err(|e| {
                    EngineError::Configuration(format!("Invalid app name header: {}", e))
                })?,
            );
        }

        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                EngineError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url,
            api_key: config.api_key,
            model: config.model,
        })
    }

    /// Build the chat-completions endpoint URL
    fn endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmProvider for OpenRouterClient {
    async fn generate(&self, request: CompletionRequest) -> Result<String, EngineError> {
        let chat_request = to_chat_request(&self.model, request);

        let response = self
            .http_client
            .post(self.endpoint_url())
            .bearer_auth(&self.api_key)
            .json(&chat_request)
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

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "OpenRouter token usage"
            );
        }

        Ok(extract_text(completion))
    }

    fn name(&self) -> &'static str {
        "openrouter"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
