//! Integration tests for the impact portfolio backend.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server
//! JWT_SECRET=... ADMIN_PASSWORD=... cargo run -p impact-server
//!
//! # Run integration tests against it
//! cargo test -p impact-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `content` - Public profile, project, and CV endpoints
//! - `auth` - Login and admin token handling
//! - `events` - Event recording and stats
//!
//! The server's base URL is read from `IMPACT_BASE_URL`, defaulting to
//! `http://localhost:3000`.
