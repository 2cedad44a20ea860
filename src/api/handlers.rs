//! HTTP handlers for the screening API

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::engine::DecisionEngine;
use crate::form::FormSchema;
use crate::types::RawAssessment;

/// Shared state for all handlers
#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<DecisionEngine>,
    /// Well name reported by `/health`
    pub well_name: String,
}

impl ApiState {
    pub fn new(well_name: impl Into<String>) -> Self {
        Self {
            engine: Arc::new(DecisionEngine::new()),
            well_name: well_name.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub well: String,
    pub evaluations: u64,
}

/// GET /api/v1/health
pub async fn health(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(HealthResponse {
        status: "ok",
        well: state.well_name.clone(),
        evaluations: state.engine.stats(),
    })
}

/// GET /api/v1/form
pub async fn form() -> Response {
    ApiResponse::ok(FormSchema::gas_lift())
}

/// POST /api/v1/recommend
pub async fn recommend(
    State(state): State<ApiState>,
    body: Result<Json<RawAssessment>, JsonRejection>,
) -> Response {
    let Json(raw) = match body {
        Ok(body) => body,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Rejected recommend body");
            return ApiErrorResponse::malformed_input(rejection.body_text());
        }
    };

    match state.engine.evaluate_raw(&raw) {
        Ok(evaluation) => ApiResponse::ok(evaluation),
        Err(e) => ApiErrorResponse::invalid_input(&e),
    }
}

/// Fallback for unmatched paths
pub async fn not_found() -> Response {
    ApiErrorResponse::not_found("No such endpoint")
}
