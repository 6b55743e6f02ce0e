// Writing Style Profiler - API server library
//
// The binary in main.rs wires configuration and logging around
// the router built here.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use style_profiler_core::{MAX_FILES, MAX_FILE_SIZE};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod errors;
pub mod handlers;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use errors::AnalyzeError;
pub use state::AppState;

/// Largest accepted request: a full set of maximum-size files plus multipart framing
pub const MAX_REQUEST_BODY: usize = MAX_FILES * MAX_FILE_SIZE as usize + 1024 * 1024;

/// Build application router
pub fn build_router(state: AppState) -> Router {
    build_router_with_limit(state, MAX_REQUEST_BODY)
}

/// Build application router accepting request bodies up to `body_limit` bytes
///
/// Oversized uploads surface through the multipart extractor and are
/// answered with a JSON error like every other failure.
pub fn build_router_with_limit(state: AppState, body_limit: usize) -> Router {
    // Configure CORS (allow localhost development)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
