//! v1 API route table.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ApiState};

/// Build the v1 API router.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/form", get(handlers::form))
        .route("/recommend", post(handlers::recommend))
        .with_state(state)
}
