//! Profile route handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{ApiJson, RequireAdmin};
use crate::models::{Profile, ProfilePatch};
use crate::routes::Ack;
use crate::state::AppState;

/// Fetch the public profile.
///
/// GET /api/profile
pub async fn show(State(state): State<AppState>) -> Result<Json<Profile>> {
    let profile = state
        .store()
        .profile()
        .await?
        .ok_or_else(|| AppError::NotFound("profile not found".to_string()))?;

    Ok(Json(profile))
}

/// Partially update the profile. Only the fields present in the body change.
///
/// PUT /api/profile (admin)
#[instrument(skip_all, fields(admin = %admin.username))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(patch): ApiJson<ProfilePatch>,
) -> Result<Json<Ack>> {
    state.store().update_profile(&patch).await?;

    tracing::info!("Profile updated");
    Ok(Json(Ack::OK))
}

/// CV download descriptor.
#[derive(Debug, Serialize)]
pub struct CvResponse {
    pub url: &'static str,
    pub message: &'static str,
}

/// Where to fetch the CV from. The file itself is served statically by the
/// frontend host.
///
/// GET /api/cv
pub async fn cv() -> Json<CvResponse> {
    Json(CvResponse {
        url: "/cv-placeholder.pdf",
        message: "CV placeholder.",
    })
}
