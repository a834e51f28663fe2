//! JSON body extraction with a consistent rejection shape.
//!
//! Axum's stock `Json` extractor answers malformed bodies with 422 and a
//! plain-text message. The API contract promises 400 with the standard JSON
//! error body for every invalid request, so handlers use `ApiJson` instead.

use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    Json,
};

use crate::error::AppError;

/// JSON extractor whose rejection is an `AppError::Validation` (400).
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
