//! Run the Fibonacci prompt against a local Ollama daemon
//!
//! Pins the local-inference backend explicitly; the construction probe
//! fails fast when the daemon is not running.
//!
//! Usage: `cargo run --example local_ollama`

use tracing_subscriber::EnvFilter;

use alfred::llm::{Engine, EngineConfig, OllamaConfig};
use alfred::prompts::{FIBONACCI_PROMPT, SYSTEM_PROMPT};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EngineConfig::Ollama(OllamaConfig::resolve(None, None));

    let engine = match Engine::connect(config).await {
        Ok(engine) => engine.with_system(SYSTEM_PROMPT),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match engine.run(FIBONACCI_PROMPT).await {
        Ok(answer) => println!("{}", answer),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
