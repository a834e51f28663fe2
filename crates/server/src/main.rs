//! Impact portfolio backend - public content API and admin surface.
//!
//! This binary serves the JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - SQLite for persistence, with an automatic in-memory fallback when the
//!   database file cannot be opened (read-only hosts)
//! - Bearer-token authentication for the admin endpoints
//!
//! The storage backend is picked once at startup; every handler goes through
//! the same adapter trait and never knows which one it got.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use secrecy::ExposeSecret;

use impact_server::config::ServerConfig;
use impact_server::routes;
use impact_server::services::auth::hash_password;
use impact_server::state::AppState;
use impact_server::store;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "impact_server=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Hash the admin password once; the stores seed the admin account with it
    let admin_password_hash = hash_password(config.admin_password.expose_secret())
        .expect("Failed to hash admin password");

    // Select and initialize the storage backend (SQLite, or in-memory fallback)
    let store = store::init_store(&config, &admin_password_hash).await;

    // Build application state and router
    let state = AppState::new(config.clone(), store);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("impact server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // ConnectInfo gives the rate limiter a peer address to fall back on
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
