//! Contact form route handler.

use axum::{Json, extract::State, http::StatusCode};
use impact_core::Email;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::ApiJson;
use crate::routes::Ack;
use crate::state::AppState;

const MIN_NAME_LENGTH: usize = 2;
const MIN_MESSAGE_LENGTH: usize = 10;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Submit the contact form.
///
/// POST /api/contact
#[instrument(skip_all, fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ContactForm>,
) -> Result<(StatusCode, Json<Ack>)> {
    let name = form.name.trim();
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(AppError::Validation(
            "name must be at least 2 characters".to_string(),
        ));
    }

    let message = form.message.trim();
    if message.chars().count() < MIN_MESSAGE_LENGTH {
        return Err(AppError::Validation(
            "message must be at least 10 characters".to_string(),
        ));
    }

    let email = Email::parse(form.email.trim())
        .map_err(|e| AppError::Validation(format!("invalid email: {e}")))?;

    state.store().save_contact(name, &email, message).await?;

    tracing::info!("Contact submission saved");
    Ok((StatusCode::CREATED, Json(Ack::OK)))
}
