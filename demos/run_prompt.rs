//! Run a single prompt against the env-configured backend
//!
//! Usage: `cargo run --example run_prompt -- "your prompt"`
//! With no argument the built-in Fibonacci prompt is used.

use tracing_subscriber::EnvFilter;

use alfred::llm::{Engine, EngineConfig};
use alfred::prompts::{FIBONACCI_PROMPT, SYSTEM_PROMPT};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| FIBONACCI_PROMPT.to_string());

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let engine = match Engine::connect(config).await {
        Ok(engine) => engine.with_system(SYSTEM_PROMPT),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match engine.run(&prompt).await {
        Ok(answer) => println!("{}", answer),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
