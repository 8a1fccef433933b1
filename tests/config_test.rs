//! Integration tests for environment-based configuration resolution
//!
//! Process environment is shared across test threads, so every test
//! takes ENV_LOCK before touching variables and clears what it set.

use std::env;
use std::sync::Mutex;

use alfred::llm::{BackendKind, EngineConfig, OpenRouterConfig};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_vars() {
    for var in [
        "ALFRED_BACKEND",
        "OPENROUTER_API_KEY",
        "OPENROUTER_BASE_URL",
        "OPENROUTER_MODEL",
        "OPENROUTER_SITE_URL",
        "OPENROUTER_APP_NAME",
        "OLLAMA_BASE_URL",
        "OLLAMA_MODEL",
    ] {
        env::remove_var(var);
    }
}

#[test]
fn test_explicit_argument_beats_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_vars();
    env::set_var("OPENROUTER_API_KEY", "env-key");
    env::set_var("OPENROUTER_MODEL", "env-model");

    let config = OpenRouterConfig::resolve(
        Some("arg-key".to_string()),
        None,
        Some("arg-model".to_string()),
    )
    .unwrap();

    assert_eq!(config.api_key, "arg-key");
    assert_eq!(config.model, "arg-model");
    clear_vars();
}

#[test]
fn test_environment_beats_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_vars();
    env::set_var("OPENROUTER_API_KEY", "env-key");
    env::set_var("OPENROUTER_BASE_URL", "https://proxy.test/v1");

    let config = OpenRouterConfig::resolve(None, None, None).unwrap();

    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.base_url, "https://proxy.test/v1");
    // Model was not set anywhere, so the default applies.
    assert_eq!(config.model, "openai/gpt-4o-mini");
    clear_vars();
}

#[test]
fn test_missing_credential_names_variable() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_vars();

    let err = OpenRouterConfig::resolve(None, None, None).unwrap_err();
    assert!(err.to_string().contains("OPENROUTER_API_KEY"));
}

#[test]
fn test_attribution_headers_read_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_vars();
    env::set_var("OPENROUTER_API_KEY", "env-key");
    env::set_var("OPENROUTER_SITE_URL", "https://example.com");
    env::set_var("OPENROUTER_APP_NAME", "alfred");

    let config = OpenRouterConfig::resolve(None, None, None).unwrap();

    assert_eq!(config.site_url.as_deref(), Some("https://example.com"));
    assert_eq!(config.app_name.as_deref(), Some("alfred"));
    clear_vars();
}

#[test]
fn test_backend_defaults_to_openrouter() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_vars();

    assert_eq!(BackendKind::from_env().unwrap(), BackendKind::OpenRouter);
}

#[test]
fn test_backend_selected_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_vars();
    env::set_var("ALFRED_BACKEND", "Ollama");
    env::set_var("OLLAMA_MODEL", "llama3:8b");

    assert_eq!(BackendKind::from_env().unwrap(), BackendKind::Ollama);

    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.backend(), BackendKind::Ollama);
    assert_eq!(config.model(), "llama3:8b");
    clear_vars();
}

#[test]
fn test_unknown_backend_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_vars();
    env::set_var("ALFRED_BACKEND", "bedrock");

    let err = BackendKind::from_env().unwrap_err();
    assert!(err.to_string().contains("openrouter"));
    assert!(err.to_string().contains("ollama"));
    clear_vars();
}
