//! Ephemeral in-memory store.
//!
//! Used on restricted hosts where SQLite cannot be initialized, and in tests.
//! All state lives behind a single async `RwLock`; writes are serialized,
//! reads are shared. Everything is lost on process exit.

use async_trait::async_trait;
use chrono::Utc;
use impact_core::{Email, ProjectId, UserId};
use tokio::sync::RwLock;

use crate::models::{
    ContactRecord, EventMetadata, EventRecord, EventStat, NewProject, Profile, ProfilePatch,
    Project, User,
};

use super::{seed, StorageAdapter, StoreError, StoreKind};

#[derive(Default)]
struct Inner {
    profile: Option<Profile>,
    projects: Vec<Project>,
    users: Vec<User>,
    events: Vec<EventRecord>,
    contacts: Vec<ContactRecord>,
    next_project_id: i64,
    next_user_id: i64,
}

/// In-memory implementation of [`StorageAdapter`].
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store (no profile, no projects, no users).
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_project_id: 1,
                next_user_id: 1,
                ..Inner::default()
            }),
        }
    }

    /// Create a store pre-populated with the seed profile, the four seed
    /// projects, and the `admin` user. A fresh in-memory store is empty by
    /// definition, so this always seeds.
    #[must_use]
    pub fn seeded(admin_password_hash: &str) -> Self {
        let mut inner = Inner {
            profile: Some(seed::seed_profile()),
            next_project_id: 1,
            next_user_id: 1,
            ..Inner::default()
        };
        for project in seed::seed_projects() {
            let id = ProjectId::new(inner.next_project_id);
            inner.next_project_id += 1;
            inner.projects.push(project.into_project(id));
        }
        inner.users.push(User {
            id: UserId::new(inner.next_user_id),
            username: seed::ADMIN_USERNAME.to_string(),
            password_hash: admin_password_hash.to_string(),
        });
        inner.next_user_id += 1;

        tracing::debug!("in-memory store seeded");
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl StorageAdapter for MemoryStore {
    async fn profile(&self) -> Result<Option<Profile>, StoreError> {
        Ok(self.inner.read().await.profile.clone())
    }

    async fn update_profile(&self, patch: &ProfilePatch) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(profile) = inner.profile.as_mut() {
            patch.apply(profile);
        }
        Ok(())
    }

    async fn projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut projects = self.inner.read().await.projects.clone();
        projects.sort_by_key(|p| p.order_index);
        Ok(projects)
    }

    async fn create_project(&self, project: NewProject) -> Result<ProjectId, StoreError> {
        let mut inner = self.inner.write().await;
        let id = ProjectId::new(inner.next_project_id);
        inner.next_project_id += 1;
        inner.projects.push(project.into_project(id));
        Ok(id)
    }

    async fn user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.username == username) {
            return Err(StoreError::Conflict(format!(
                "username '{username}' already exists"
            )));
        }
        let id = UserId::new(inner.next_user_id);
        inner.next_user_id += 1;
        inner.users.push(User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(())
    }

    async fn log_event(
        &self,
        event_type: &str,
        page: &str,
        metadata: &EventMetadata,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.events.push(EventRecord {
            event_type: event_type.to_string(),
            page: page.to_string(),
            metadata: metadata.clone(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    async fn event_stats(&self) -> Result<Vec<EventStat>, StoreError> {
        let inner = self.inner.read().await;

        // Group by (type, UTC calendar day)
        let mut counts: std::collections::HashMap<(String, String), i64> =
            std::collections::HashMap::new();
        for event in &inner.events {
            let day = event.timestamp.date_naive().to_string();
            *counts
                .entry((event.event_type.clone(), day))
                .or_insert(0) += 1;
        }

        let mut stats: Vec<EventStat> = counts
            .into_iter()
            .map(|((event_type, day), count)| EventStat {
                event_type,
                day,
                count,
            })
            .collect();
        // Most recent day first, type ascending within a day
        stats.sort_by(|a, b| b.day.cmp(&a.day).then(a.event_type.cmp(&b.event_type)));
        Ok(stats)
    }

    async fn save_contact(
        &self,
        name: &str,
        email: &Email,
        message: &str,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.contacts.push(ContactRecord {
            name: name.to_string(),
            email: email.clone(),
            message: message.to_string(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Memory
    }
}
