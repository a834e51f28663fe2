//! HTTP route handlers for the portfolio API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/health           - Health check with storage backend info
//! GET  /api/ping             - Liveness probe
//!
//! # Content
//! GET  /api/profile          - Public profile
//! PUT  /api/profile          - Partial profile update (admin)
//! GET  /api/projects         - Project list, ordered for display
//! POST /api/projects         - Create project (admin)
//! GET  /api/cv               - CV download descriptor
//!
//! # Auth
//! POST /api/admin/login      - Username/password login, returns bearer token
//!
//! # Events
//! POST /api/events           - Record an analytics event (rate limited per IP)
//! GET  /api/events/stats     - Daily event counts (admin)
//!
//! # Contact
//! POST /api/contact          - Contact form submission (rate limited per IP)
//! ```
//!
//! Everything lives under `/api`; any unmatched path below it gets a JSON
//! 404 body rather than axum's default empty response.

pub mod auth;
pub mod contact;
pub mod events;
pub mod health;
pub mod profile;
pub mod projects;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{contact_rate_limiter, events_rate_limiter};
use crate::state::AppState;

/// Minimal acknowledgement body for writes that return no data.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub status: &'static str,
}

impl Ack {
    pub const OK: Self = Self { status: "ok" };
}

/// Create the API routes router.
///
/// The two anonymous write paths carry their own per-IP rate limiters; the
/// authed stats endpoint is not limited.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/ping", get(health::ping))
        .route("/profile", get(profile::show).put(profile::update))
        .route("/projects", get(projects::list).post(projects::create))
        .route("/cv", get(profile::cv))
        .route("/admin/login", post(auth::login))
        .route(
            "/events",
            post(events::record).route_layer(events_rate_limiter()),
        )
        .route("/events/stats", get(events::stats))
        .route(
            "/contact",
            post(contact::submit).route_layer(contact_rate_limiter()),
        )
}

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON 404 body.
#[derive(Debug, Serialize)]
struct NotFoundBody {
    error: &'static str,
}

async fn not_found() -> (StatusCode, Json<NotFoundBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "API endpoint not found",
        }),
    )
}
