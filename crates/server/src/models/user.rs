//! Admin user domain types.

use impact_core::UserId;

/// An admin account. There is no self-registration; the single `admin` user
/// is seeded at first startup.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Argon2id password hash (PHC string).
    pub password_hash: String,
}
