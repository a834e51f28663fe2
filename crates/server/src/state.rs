//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::StorageAdapter;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The storage adapter is chosen once at startup
/// and injected here; handlers never know or care which backend they talk to.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: Arc<dyn StorageAdapter>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn StorageAdapter>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the storage adapter.
    #[must_use]
    pub fn store(&self) -> &dyn StorageAdapter {
        self.inner.store.as_ref()
    }
}
