//! HTTP API server for the squaring service.
//!
//! Exposes a health check at `/` and the squaring endpoint at `/square`,
//! with permissive CORS and structured per-request logging (tracing).

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
///
/// Every response carries `Access-Control-Allow-Origin: *` and permits
/// any method and header. Credentials are not advertised: a wildcard
/// origin cannot be combined with `Access-Control-Allow-Credentials`.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::health::check))
        .route("/square", post(routes::square::compute))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
