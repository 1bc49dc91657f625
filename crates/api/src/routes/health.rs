use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `healthy` or `unhealthy`.
    pub status: &'static str,
    /// Database reachability: `healthy` or `unhealthy`.
    pub database: &'static str,
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Service info payload for `GET {prefix}`.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub environment: String,
}

/// GET /health -- returns service and database health.
///
/// Independent of note data: only probes the pool with `SELECT 1`.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = match notes_db::health_check(&state.pool).await {
        Ok(()) => "healthy",
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            "unhealthy"
        }
    };

    Json(HealthResponse {
        status,
        database: status,
        message: "API is operational",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET {prefix} -- identifies the service and its environment.
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Notes API is running!",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    })
}

/// Mount health check routes (root level, and again under the prefix).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
