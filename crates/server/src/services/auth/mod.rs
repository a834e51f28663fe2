//! Authentication service.
//!
//! Password login against the seeded admin account and issuance/verification
//! of the signed bearer tokens that gate mutating endpoints.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::store::StorageAdapter;

/// Token lifetime.
const TOKEN_TTL_HOURS: i64 = 24;

/// Claims embedded in an admin bearer token. The username is the only claim.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated admin.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Authentication service.
pub struct AuthService<'a> {
    store: &'a dyn StorageAdapter,
    jwt_secret: &'a SecretString,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn StorageAdapter, jwt_secret: &'a SecretString) -> Self {
        Self { store, jwt_secret }
    }

    /// Login with username and password, returning a signed bearer token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` whether the username is
    /// unknown or the password is wrong; callers cannot distinguish the two.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .store
            .user(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        issue_token(&user.username, self.jwt_secret)
    }
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the password does not match.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

/// Issue a signed bearer token for `username`, valid for 24 hours.
///
/// # Errors
///
/// Returns `AuthError::TokenSigning` if signing fails.
pub fn issue_token(username: &str, jwt_secret: &SecretString) -> Result<String, AuthError> {
    let exp = (Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp();
    let claims = Claims {
        sub: username.to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.expose_secret().as_bytes()),
    )
    .map_err(|_| AuthError::TokenSigning)
}

/// Verify a bearer token's signature and expiry, returning its claims.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` for any malformed, tampered, or expired
/// token.
pub fn verify_token(token: &str, jwt_secret: &SecretString) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn secret() -> SecretString {
        SecretString::from("kQ8vJ2xR7mT4wN9bZ6cF1aE3dH5sL0pY")
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).is_ok());
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let hash = hash_password("right").unwrap();
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_garbage_hash_is_invalid_credentials() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_token_roundtrip() {
        let token = issue_token("admin", &secret()).unwrap();
        let claims = verify_token(&token, &secret()).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            verify_token("not.a.token", &secret()),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let other = SecretString::from("uM3pW8qX2rV7yT1zK6nJ4bG9cD5fS0aL");
        let token = issue_token("admin", &other).unwrap();
        assert!(matches!(
            verify_token(&token, &secret()),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Signed correctly but expired well past the default leeway
        let claims = Claims {
            sub: "admin".to_string(),
            exp: Utc::now().timestamp() - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify_token(&token, &secret()),
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_login_with_seeded_admin() {
        let hash = hash_password("hunter2-but-longer").unwrap();
        let store = MemoryStore::seeded(&hash);
        let jwt_secret = secret();
        let auth = AuthService::new(&store, &jwt_secret);

        let token = auth.login("admin", "hunter2-but-longer").await.unwrap();
        assert_eq!(verify_token(&token, &jwt_secret).unwrap().sub, "admin");
    }

    #[tokio::test]
    async fn test_login_unknown_user_and_wrong_password_look_alike() {
        let hash = hash_password("the-real-password").unwrap();
        let store = MemoryStore::seeded(&hash);
        let jwt_secret = secret();
        let auth = AuthService::new(&store, &jwt_secret);

        let unknown = auth.login("nobody", "whatever").await.unwrap_err();
        let wrong = auth.login("admin", "wrong-password").await.unwrap_err();
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
    }
}
