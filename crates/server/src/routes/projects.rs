//! Project route handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{ApiJson, RequireAdmin};
use crate::models::{NewProject, Project};
use crate::routes::Ack;
use crate::state::AppState;

/// List all projects in display order.
///
/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Project>>> {
    let projects = state.store().projects().await?;
    Ok(Json(projects))
}

/// Create a project. Missing fields become blank rather than rejecting the
/// request.
///
/// POST /api/projects (admin)
#[instrument(skip_all, fields(admin = %admin.username, title = %project.title))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ApiJson(project): ApiJson<NewProject>,
) -> Result<(StatusCode, Json<Ack>)> {
    let id = state.store().create_project(project).await?;

    tracing::info!(project_id = %id, "Project created");
    Ok((StatusCode::CREATED, Json(Ack::OK)))
}
