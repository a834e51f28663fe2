//! File-backed SQLite store.
//!
//! The normal deployment backend. List/map-valued project fields and event
//! metadata are stored as JSON-encoded TEXT columns; the encoding never
//! leaves this module.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use impact_core::{Email, ProjectId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::Row;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
};

use crate::models::{
    EventMetadata, EventStat, NewProject, Profile, ProfilePatch, Project, User,
};

use super::{seed, StorageAdapter, StoreError, StoreKind};

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS profile (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        name TEXT NOT NULL,
        title TEXT NOT NULL,
        subtitle TEXT NOT NULL,
        pitch TEXT NOT NULL,
        email TEXT NOT NULL,
        linkedin TEXT NOT NULL,
        github TEXT NOT NULL,
        status TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL DEFAULT '',
        kind TEXT NOT NULL DEFAULT '',
        summary TEXT NOT NULL DEFAULT '',
        problem TEXT NOT NULL DEFAULT '',
        solution TEXT NOT NULL DEFAULT '',
        stack TEXT NOT NULL DEFAULT '[]',
        highlights TEXT NOT NULL DEFAULT '[]',
        challenges TEXT NOT NULL DEFAULT '[]',
        architecture_diagram TEXT NOT NULL DEFAULT '',
        links TEXT NOT NULL DEFAULT '{}',
        order_index INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_type TEXT NOT NULL,
        page TEXT NOT NULL,
        metadata TEXT NOT NULL DEFAULT '{}',
        timestamp TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )",
];

/// SQLite implementation of [`StorageAdapter`].
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `path`, run the schema, and
    /// seed it if empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or initialized.
    /// Callers treat this as a signal to fall back to the in-memory store.
    pub async fn connect(path: &Path, admin_password_hash: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;

        Self::with_pool(pool, admin_password_hash).await
    }

    /// Build a store on an existing pool. Used by `connect` and by tests
    /// running against an in-memory database.
    pub async fn with_pool(pool: SqlitePool, admin_password_hash: &str) -> Result<Self, StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await?;
        }

        let store = Self { pool };
        store.seed_if_empty(admin_password_hash).await?;
        Ok(store)
    }

    /// Populate the seed profile, projects, and admin user, but only when the
    /// profile table is empty. Re-running against a seeded database is a
    /// no-op, so repeated startups never duplicate content.
    async fn seed_if_empty(&self, admin_password_hash: &str) -> Result<(), StoreError> {
        let profile_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profile")
            .fetch_one(&self.pool)
            .await?;
        if profile_count > 0 {
            return Ok(());
        }

        let profile = seed::seed_profile();
        sqlx::query(
            "INSERT INTO profile (id, name, title, subtitle, pitch, email, linkedin, github, status, updated_at)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&profile.name)
        .bind(&profile.title)
        .bind(&profile.subtitle)
        .bind(&profile.pitch)
        .bind(&profile.email)
        .bind(&profile.linkedin)
        .bind(&profile.github)
        .bind(&profile.status)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        for project in seed::seed_projects() {
            self.insert_project(&project).await?;
        }

        self.create_user(seed::ADMIN_USERNAME, admin_password_hash)
            .await?;

        tracing::info!("sqlite store seeded");
        Ok(())
    }

    async fn insert_project(&self, project: &NewProject) -> Result<ProjectId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO projects (title, kind, summary, problem, solution, stack, highlights, challenges, architecture_diagram, links, order_index)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )
        .bind(&project.title)
        .bind(&project.kind)
        .bind(&project.summary)
        .bind(&project.problem)
        .bind(&project.solution)
        .bind(encode_json(&project.stack)?)
        .bind(encode_json(&project.highlights)?)
        .bind(encode_json(&project.challenges)?)
        .bind(&project.architecture_diagram)
        .bind(encode_json(&project.links)?)
        .bind(project.order_index)
        .execute(&self.pool)
        .await?;

        Ok(ProjectId::new(result.last_insert_rowid()))
    }
}

#[async_trait]
impl StorageAdapter for SqliteStore {
    async fn profile(&self) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, title, subtitle, pitch, email, linkedin, github, status
             FROM profile WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| profile_from_row(&r)).transpose()
    }

    async fn update_profile(&self, patch: &ProfilePatch) -> Result<(), StoreError> {
        // COALESCE keeps the stored value wherever the patch binds NULL, so
        // omitted fields stay untouched in a single statement.
        sqlx::query(
            "UPDATE profile SET
                name = COALESCE(?1, name),
                title = COALESCE(?2, title),
                subtitle = COALESCE(?3, subtitle),
                pitch = COALESCE(?4, pitch),
                email = COALESCE(?5, email),
                linkedin = COALESCE(?6, linkedin),
                github = COALESCE(?7, github),
                status = COALESCE(?8, status),
                updated_at = ?9
             WHERE id = 1",
        )
        .bind(patch.name.as_deref())
        .bind(patch.title.as_deref())
        .bind(patch.subtitle.as_deref())
        .bind(patch.pitch.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.linkedin.as_deref())
        .bind(patch.github.as_deref())
        .bind(patch.status.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn projects(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, title, kind, summary, problem, solution, stack, highlights, challenges, architecture_diagram, links, order_index
             FROM projects ORDER BY order_index ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }

    async fn create_project(&self, project: NewProject) -> Result<ProjectId, StoreError> {
        self.insert_project(&project).await
    }

    async fn user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT id, username, password_hash FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(User {
                id: r.try_get("id")?,
                username: r.try_get("username")?,
                password_hash: r.try_get("password_hash")?,
            })),
            None => Ok(None),
        }
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<(), StoreError> {
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?1, ?2)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(
                StoreError::Conflict(format!("username '{username}' already exists")),
            ),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    async fn log_event(
        &self,
        event_type: &str,
        page: &str,
        metadata: &EventMetadata,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO events (event_type, page, metadata, timestamp) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(event_type)
        .bind(page)
        .bind(encode_json(metadata)?)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn event_stats(&self) -> Result<Vec<EventStat>, StoreError> {
        // Timestamps are stored in UTC, so date() yields UTC day boundaries.
        let rows = sqlx::query(
            "SELECT event_type, date(timestamp) AS day, COUNT(*) AS count
             FROM events
             GROUP BY event_type, day
             ORDER BY day DESC, event_type ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| {
                Ok(EventStat {
                    event_type: r.try_get("event_type")?,
                    day: r.try_get("day")?,
                    count: r.try_get("count")?,
                })
            })
            .collect()
    }

    async fn save_contact(
        &self,
        name: &str,
        email: &Email,
        message: &str,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO contacts (name, email, message, timestamp) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(name)
        .bind(email.as_str())
        .bind(message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn is_ready(&self) -> bool {
        !self.pool.is_closed()
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Sqlite
    }
}

fn profile_from_row(row: &SqliteRow) -> Result<Profile, StoreError> {
    Ok(Profile {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        title: row.try_get("title")?,
        subtitle: row.try_get("subtitle")?,
        pitch: row.try_get("pitch")?,
        email: row.try_get("email")?,
        linkedin: row.try_get("linkedin")?,
        github: row.try_get("github")?,
        status: row.try_get("status")?,
    })
}

fn project_from_row(row: &SqliteRow) -> Result<Project, StoreError> {
    Ok(Project {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        kind: row.try_get("kind")?,
        summary: row.try_get("summary")?,
        problem: row.try_get("problem")?,
        solution: row.try_get("solution")?,
        stack: decode_json(&row.try_get::<String, _>("stack")?)?,
        highlights: decode_json(&row.try_get::<String, _>("highlights")?)?,
        challenges: decode_json(&row.try_get::<String, _>("challenges")?)?,
        architecture_diagram: row.try_get("architecture_diagram")?,
        links: decode_json(&row.try_get::<String, _>("links")?)?,
        order_index: row.try_get("order_index")?,
    })
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value)
        .map_err(|e| StoreError::DataCorruption(format!("failed to encode JSON column: {e}")))
}

fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, StoreError> {
    serde_json::from_str(raw)
        .map_err(|e| StoreError::DataCorruption(format!("invalid JSON column in database: {e}")))
}
