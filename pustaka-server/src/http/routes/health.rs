//! Health check endpoints

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Database reachability
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub database: bool,
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/status
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "health",
    summary = "Database reachability",
    responses((status = 200, description = "Result of a `SELECT 1` round-trip", body = StatusResponse))
)]
pub(crate) async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let database = match state.dao().ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            false
        }
    };
    Json(StatusResponse { database })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/status", get(status))
}
