//! Contact form domain types.

use chrono::{DateTime, Utc};
use impact_core::Email;

/// A contact form submission. Append-only; never updated or deleted, and
/// never echoed back to the client.
#[derive(Debug, Clone)]
pub struct ContactRecord {
    pub name: String,
    pub email: Email,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
