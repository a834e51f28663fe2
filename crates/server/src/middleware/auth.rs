//! Admin authentication extractor.
//!
//! Protected handlers take `RequireAdmin` as an argument; the extractor
//! validates the `Authorization: Bearer <token>` header before the handler
//! runs. A request with no token at all gets 401; a request with a token
//! that fails verification gets 403.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::error::AppError;
use crate::services::auth::verify_token;
use crate::state::AppState;

/// Identity of the authenticated admin, taken from the token claims.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    /// Username from the token's subject claim.
    pub username: String,
}

/// Extractor that requires a valid admin bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.username)
/// }
/// ```
pub struct RequireAdmin(pub AdminIdentity);

impl<S> FromRequestParts<S> for RequireAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;

        let app_state = AppState::from_ref(state);
        let claims = verify_token(&token, &app_state.config().jwt_secret)
            .map_err(|_| AppError::Forbidden)?;

        Ok(Self(AdminIdentity {
            username: claims.sub,
        }))
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
