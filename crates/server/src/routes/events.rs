//! Analytics event route handlers.
//!
//! Events are fire-and-forget from the frontend's point of view: anything
//! well-formed is appended, and aggregation happens at read time for the
//! admin stats endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{ApiJson, RequireAdmin};
use crate::models::{EventMetadata, EventStat};
use crate::routes::Ack;
use crate::state::AppState;

/// Event submission body.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub page: String,
    #[serde(default)]
    pub metadata: Option<EventMetadata>,
}

/// Record an analytics event.
///
/// POST /api/events
#[instrument(skip_all, fields(event_type = %event.event_type, page = %event.page))]
pub async fn record(
    State(state): State<AppState>,
    ApiJson(event): ApiJson<EventRequest>,
) -> Result<(StatusCode, Json<Ack>)> {
    if event.event_type.trim().is_empty() {
        return Err(AppError::Validation("eventType is required".to_string()));
    }
    if event.page.trim().is_empty() {
        return Err(AppError::Validation("page is required".to_string()));
    }

    let metadata = event.metadata.unwrap_or_default();
    state
        .store()
        .log_event(&event.event_type, &event.page, &metadata)
        .await?;

    Ok((StatusCode::CREATED, Json(Ack::OK)))
}

/// Event counts grouped by type and UTC day, most recent day first.
///
/// GET /api/events/stats (admin)
#[instrument(skip_all, fields(admin = %admin.username))]
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> Result<Json<Vec<EventStat>>> {
    let stats = state.store().event_stats().await?;
    Ok(Json(stats))
}
