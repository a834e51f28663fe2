//! Storage adapters for the portfolio API.
//!
//! Two interchangeable implementations of one persistence contract:
//!
//! - [`SqliteStore`] - file-backed SQLite database (the normal deployment)
//! - [`MemoryStore`] - ephemeral in-memory store (restricted hosts, tests)
//!
//! The choice is made exactly once at startup by [`init_store`] and injected
//! through `AppState`; call sites never branch on the backend. Any failure to
//! open the SQLite database downgrades to the in-memory store with a logged
//! warning and is never surfaced to clients.
//!
//! Both implementations seed themselves on first initialization (empty
//! underlying store) with the same literal profile, four projects, and a
//! single `admin` user. Re-initializing an already-seeded store is a no-op.

pub mod memory;
pub mod seed;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use impact_core::{Email, ProjectId};
use thiserror::Error;

use crate::config::ServerConfig;
use crate::models::{EventMetadata, EventStat, NewProject, Profile, ProfilePatch, Project, User};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., duplicate username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Which backend a store instance is using. Reported by `/api/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Sqlite,
}

impl StoreKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sqlite => "sqlite",
        }
    }
}

/// The persistence contract shared by both store implementations.
///
/// Events and contacts are append-only; the profile is a singleton that is
/// merged into, never replaced or deleted.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Fetch the singleton profile, if seeded.
    async fn profile(&self) -> Result<Option<Profile>, StoreError>;

    /// Merge the supplied fields into the singleton profile. Omitted fields
    /// stay untouched. A no-op when no profile exists yet.
    async fn update_profile(&self, patch: &ProfilePatch) -> Result<(), StoreError>;

    /// All projects, ascending by `order_index` regardless of insertion order.
    async fn projects(&self) -> Result<Vec<Project>, StoreError>;

    /// Insert a project, assigning a fresh id.
    async fn create_project(&self, project: NewProject) -> Result<ProjectId, StoreError>;

    /// Look up a user by username.
    async fn user(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Insert a user. Returns [`StoreError::Conflict`] on a duplicate
    /// username in both implementations.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<(), StoreError>;

    /// Append a timestamped analytics event.
    async fn log_event(
        &self,
        event_type: &str,
        page: &str,
        metadata: &EventMetadata,
    ) -> Result<(), StoreError>;

    /// Event counts grouped by (type, UTC calendar day), most recent day
    /// first, type ascending within a day.
    async fn event_stats(&self) -> Result<Vec<EventStat>, StoreError>;

    /// Append a timestamped contact form submission.
    async fn save_contact(
        &self,
        name: &str,
        email: &Email,
        message: &str,
    ) -> Result<(), StoreError>;

    /// Health probe. Always true once the store is constructed.
    fn is_ready(&self) -> bool;

    /// Which backend this store is.
    fn kind(&self) -> StoreKind;
}

/// Select and initialize the storage backend. Called exactly once at startup.
///
/// `EPHEMERAL_STORAGE` forces the in-memory store (restricted hosts where the
/// filesystem is read-only). Otherwise SQLite is attempted, and any
/// initialization failure falls back to the in-memory store with a logged
/// warning.
pub async fn init_store(config: &ServerConfig, admin_password_hash: &str) -> Arc<dyn StorageAdapter> {
    if config.ephemeral_storage {
        tracing::info!("ephemeral storage requested, using in-memory store");
        return Arc::new(MemoryStore::seeded(admin_password_hash));
    }

    match SqliteStore::connect(&config.database_path, admin_password_hash).await {
        Ok(store) => {
            tracing::info!(path = %config.database_path.display(), "sqlite store ready");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "failed to initialize sqlite store, falling back to in-memory"
            );
            Arc::new(MemoryStore::seeded(admin_password_hash))
        }
    }
}
