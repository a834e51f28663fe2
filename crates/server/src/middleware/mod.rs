//! HTTP middleware: authentication extractors, rate limiting, and request
//! body validation.

pub mod auth;
pub mod rate_limit;
pub mod validation;

pub use auth::{AdminIdentity, RequireAdmin};
pub use rate_limit::{contact_rate_limiter, events_rate_limiter};
pub use validation::ApiJson;
