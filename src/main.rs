use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alfred::handlers::SharedEngine;
use alfred::llm::{Engine, EngineConfig};
use alfred::prompts::SYSTEM_PROMPT;
use alfred::routes::configure_routes;

/// Build the process-wide engine handle
///
/// Construction failure is not fatal to the server: the facade starts
/// Degraded and the /run-family endpoints answer 503 until the process
/// is restarted with working configuration.
async fn init_engine() -> SharedEngine {
    let engine = match EngineConfig::from_env() {
        Ok(config) => Engine::connect(config).await,
        Err(e) => Err(e),
    };

    match engine {
        Ok(engine) => Arc::new(Some(engine.with_system(SYSTEM_PROMPT))),
        Err(e) => {
            warn!(
                "Failed to initialize LLM engine: {}. \
                 API will still start; /run endpoints will return 503 until fixed.",
                e
            );
            Arc::new(None)
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let engine = init_engine().await;
    let routes = configure_routes(engine.clone());

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(
        ([0, 0, 0, 0], 8000),
        async {
            let _ = tokio::signal::ctrl_c().await;
        },
    );

    info!("Starting server on http://{}", addr);
    server.await;

    // Clear the handle unconditionally on the way out.
    drop(engine);
    info!("Server stopped");
}
