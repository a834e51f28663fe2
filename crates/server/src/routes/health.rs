//! Health and liveness handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Which storage backend is live: "sqlite" or "memory".
    pub adapter: &'static str,
    pub db: bool,
}

/// Health check with storage backend info.
///
/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store();
    Json(HealthResponse {
        status: "ok",
        adapter: store.kind().as_str(),
        db: store.is_ready(),
    })
}

/// Bare liveness probe.
///
/// GET /api/ping
pub async fn ping() -> &'static str {
    "pong"
}
