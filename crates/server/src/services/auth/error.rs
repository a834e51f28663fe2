//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong password or unknown username. Never reveals which.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token failed signature or expiry verification.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Token could not be signed.
    #[error("token signing error")]
    TokenSigning,

    /// Store error during a lookup.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
