//! Health check endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::not_found;
use crate::db::repos::StoreError;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 once the database answers, 503 before
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, database) = match state.users().ping().await {
        Ok(()) => (StatusCode::OK, "ok", "connected"),
        Err(StoreError::NotReady) => (StatusCode::SERVICE_UNAVAILABLE, "starting", "connecting"),
        Err(e) => {
            tracing::warn!(error = %e, "health check query failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health).fallback(not_found))
}
