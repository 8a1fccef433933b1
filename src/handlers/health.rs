// GET / and GET /health handlers

use std::convert::Infallible;

use warp::http::StatusCode;

use super::SharedEngine;
use crate::models::{HealthResponse, RootResponse};

/// Static liveness message, independent of engine state
pub async fn root_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::with_status(
        warp::reply::json(&RootResponse {
            message: "Alfred AI Agent API is running".to_string(),
        }),
        StatusCode::OK,
    ))
}

/// Reports whether the engine handle is present
pub async fn health_handler(engine: SharedEngine) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::with_status(
        warp::reply::json(&HealthResponse {
            status: "healthy".to_string(),
            engine_ready: engine.is_some(),
        }),
        StatusCode::OK,
    ))
}
