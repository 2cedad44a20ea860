//! REST API module using Axum
//!
//! Exposes the screening engine over HTTP:
//! - `GET  /api/v1/health` - liveness, well name, evaluation count
//! - `GET  /api/v1/form` - form schema for presentation layers
//! - `POST /api/v1/recommend` - evaluate a JSON assessment

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ApiState;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `GLID_CORS_ORIGINS` to a comma-separated list of allowed origins
/// when a separately hosted form needs to call the API.
fn build_cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var("GLID_CORS_ORIGINS") {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            base.allow_origin(allowed)
        }
        Err(_) => base,
    }
}

/// Create the complete application router.
pub fn create_app(state: ApiState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes(state))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}
