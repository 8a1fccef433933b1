// Route definitions

use warp::Filter;

use crate::handlers::{self, SharedEngine};

/// Filter injecting the shared engine handle into handlers
fn with_engine(
    engine: SharedEngine,
) -> impl Filter<Extract = (SharedEngine,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || engine.clone())
}

pub fn configure_routes(
    engine: SharedEngine,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /
    let root = warp::path::end()
        .and(warp::get())
        .and_then(handlers::root_handler);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_engine(engine.clone()))
        .and_then(handlers::health_handler);

    // POST /run
    let run = warp::path("run")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_engine(engine.clone()))
        .and(warp::body::json())
        .and_then(handlers::run_prompt_handler);

    // GET /fibonacci
    let fibonacci = warp::path("fibonacci")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_engine(engine))
        .and_then(handlers::fibonacci_handler);

    // Combine routes
    root.or(health).or(run).or(fibonacci)
}
