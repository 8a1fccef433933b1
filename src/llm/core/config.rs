//! Backend selection and provider configuration
//!
//! Each field resolves in order: explicit argument, then the named
//! environment variable, then a hard-coded default. The OpenRouter
//! credential is the one field with no default.

use std::env;

use super::error::EngineError;

/// Environment variable selecting the backend ("openrouter" or "ollama")
pub const BACKEND_VAR: &str = "ALFRED_BACKEND";

/// Environment variable holding the OpenRouter API key
pub const OPENROUTER_API_KEY_VAR: &str = "OPENROUTER_API_KEY";
/// Environment variable overriding the OpenRouter base URL
pub const OPENROUTER_BASE_URL_VAR: &str = "OPENROUTER_BASE_URL";
/// Environment variable overriding the OpenRouter model id
pub const OPENROUTER_MODEL_VAR: &str = "OPENROUTER_MODEL";
/// Optional environment variable sent as the HTTP-Referer header
pub const OPENROUTER_SITE_URL_VAR: &str = "OPENROUTER_SITE_URL";
/// Optional environment variable sent as the X-Title header
pub const OPENROUTER_APP_NAME_VAR: &str = "OPENROUTER_APP_NAME";

/// Environment variable overriding the Ollama base URL
pub const OLLAMA_BASE_URL_VAR: &str = "OLLAMA_BASE_URL";
/// Environment variable overriding the Ollama model id
pub const OLLAMA_MODEL_VAR: &str = "OLLAMA_MODEL";

const OPENROUTER_DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const OPENROUTER_DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";
const OLLAMA_DEFAULT_MODEL: &str = "qwen2:7b";

/// Pick the first value present: explicit argument, then environment variable
fn resolve_field(explicit: Option<String>, env_name: &str) -> Option<String> {
    explicit.or_else(|| env::var(env_name).ok())
}

/// Which provider backend the engine talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// OpenRouter hosted chat-completion API
    OpenRouter,
    /// Local Ollama daemon
    Ollama,
}

impl BackendKind {
    /// Parse a backend name (case-insensitive)
    pub fn parse(value: &str) -> Result<Self, EngineError> {
        match value.to_ascii_lowercase().as_str() {
            "openrouter" => Ok(BackendKind::OpenRouter),
            "ollama" => Ok(BackendKind::Ollama),
            other => Err(EngineError::Configuration(format!(
                "Unknown backend '{}'. Set {} to 'openrouter' or 'ollama'.",
                other, BACKEND_VAR
            ))),
        }
    }

    /// Read the backend from the environment, defaulting to OpenRouter
    pub fn from_env() -> Result<Self, EngineError> {
        match env::var(BACKEND_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(BackendKind::OpenRouter),
        }
    }

    /// Human-readable backend name
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::OpenRouter => "openrouter",
            BackendKind::Ollama => "ollama",
        }
    }
}

/// Configuration for the OpenRouter backend
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// Bearer credential (required, no default)
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Optional site URL attached as HTTP-Referer to every request
    pub site_url: Option<String>,
    /// Optional application name attached as X-Title to every request
    pub app_name: Option<String>,
}

impl OpenRouterConfig {
    /// Resolve the configuration from explicit values, the environment,
    /// and defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no credential is available, or
    /// when the resolved credential is empty. The message names the
    /// environment variable to set.
    pub fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Result<Self, EngineError> {
        let api_key = resolve_field(api_key, OPENROUTER_API_KEY_VAR);
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(EngineError::Configuration(format!(
                    "{} is not set. Set it to your OpenRouter API key.",
                    OPENROUTER_API_KEY_VAR
                )))
            }
        };

        let base_url = resolve_field(base_url, OPENROUTER_BASE_URL_VAR)
            .unwrap_or_else(|| OPENROUTER_DEFAULT_BASE_URL.to_string());
        let model = resolve_field(model, OPENROUTER_MODEL_VAR)
            .unwrap_or_else(|| OPENROUTER_DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
            site_url: env::var(OPENROUTER_SITE_URL_VAR).ok(),
            app_name: env::var(OPENROUTER_APP_NAME_VAR).ok(),
        })
    }
}

/// Configuration for the Ollama backend
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Daemon base URL
    pub base_url: String,
    /// Model identifier
    pub model: String,
}

impl OllamaConfig {
    /// Resolve the configuration from explicit values, the environment,
    /// and defaults. Ollama needs no credential, so this cannot fail.
    pub fn resolve(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            base_url: resolve_field(base_url, OLLAMA_BASE_URL_VAR)
                .unwrap_or_else(|| OLLAMA_DEFAULT_BASE_URL.to_string()),
            model: resolve_field(model, OLLAMA_MODEL_VAR)
                .unwrap_or_else(|| OLLAMA_DEFAULT_MODEL.to_string()),
        }
    }
}

/// Fully resolved engine configuration, one variant per backend
#[derive(Debug, Clone)]
pub enum EngineConfig {
    OpenRouter(OpenRouterConfig),
    Ollama(OllamaConfig),
}

impl EngineConfig {
    /// Resolve the whole configuration from the environment only
    pub fn from_env() -> Result<Self, EngineError> {
        match BackendKind::from_env()? {
            BackendKind::OpenRouter => {
                Ok(EngineConfig::OpenRouter(OpenRouterConfig::resolve(None, None, None)?))
            }
            BackendKind::Ollama => Ok(EngineConfig::Ollama(OllamaConfig::resolve(None, None))),
        }
    }

    /// The backend this configuration selects
    pub fn backend(&self) -> BackendKind {
        match self {
            EngineConfig::OpenRouter(_) => BackendKind::OpenRouter,
            EngineConfig::Ollama(_) => BackendKind::Ollama,
        }
    }

    /// The resolved model identifier
    pub fn model(&self) -> &str {
        match self {
            EngineConfig::OpenRouter(config) => &config.model,
            EngineConfig::Ollama(config) => &config.model,
        }
    }
}
