// POST /run and GET /fibonacci handlers

use std::convert::Infallible;

use tracing::{error, info};
use warp::http::StatusCode;

use super::SharedEngine;
use crate::models::{ErrorResponse, PromptRequest, PromptResponse};
use crate::prompts::FIBONACCI_PROMPT;

/// Run a user-supplied prompt through the engine
pub async fn run_prompt_handler(
    engine: SharedEngine,
    request: PromptRequest,
) -> Result<impl warp::Reply, Infallible> {
    info!("POST /run: {}", request.prompt);
    Ok(run_with_engine(&engine, &request.prompt, "Error running prompt").await)
}

/// Run the built-in Fibonacci prompt through the engine
pub async fn fibonacci_handler(engine: SharedEngine) -> Result<impl warp::Reply, Infallible> {
    info!("GET /fibonacci");
    Ok(run_with_engine(&engine, FIBONACCI_PROMPT, "Error running Fibonacci prompt").await)
}

/// Shared Degraded/error handling for the /run-family endpoints
async fn run_with_engine(
    engine: &SharedEngine,
    prompt: &str,
    error_prefix: &str,
) -> warp::reply::WithStatus<warp::reply::Json> {
    let Some(engine) = engine.as_ref() else {
        return warp::reply::with_status(
            warp::reply::json(&ErrorResponse {
                detail: "Engine not initialized".to_string(),
            }),
            StatusCode::SERVICE_UNAVAILABLE,
        );
    };

    match engine.run(prompt).await {
        Ok(result) => warp::reply::with_status(
            warp::reply::json(&PromptResponse::success(result)),
            StatusCode::OK,
        ),
        Err(e) => {
            error!("{}: {}", error_prefix, e);
            warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    detail: format!("{}: {}", error_prefix, e),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
