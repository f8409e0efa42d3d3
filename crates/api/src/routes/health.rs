//! Health check endpoint.

use axum::Json;

/// GET / — confirms the service is up.
pub async fn check() -> Json<&'static str> {
    Json("Working.")
}
