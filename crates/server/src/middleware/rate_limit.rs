//! Rate limiting middleware using governor and `tower_governor`.
//!
//! Provides per-IP rate limiters for the two unauthenticated write paths:
//! - `events_rate_limiter`: ~100 events per 15 minutes per IP
//! - `contact_rate_limiter`: 5 contact submissions per hour per IP

use std::net::IpAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

/// Key extractor that checks proxy headers first, then falls back to the
/// socket's peer address.
#[derive(Clone, Copy)]
pub struct ClientIpKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();

        // Try X-Forwarded-For (first IP in the chain)
        if let Some(ip) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try X-Real-IP
        if let Some(ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try Fly-Client-IP (Fly.io's header)
        if let Some(ip) = headers
            .get("fly-client-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Direct connection: peer address from the connect info
        if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<std::net::SocketAddr>>()
        {
            return Ok(addr.ip());
        }

        Err(GovernorError::UnableToExtractKey)
    }
}

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for event logging: ~100 events per 15 minutes per IP.
///
/// Configuration: 1 token every 9 seconds (replenish), burst of 100.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(9)` and `burst_size(100)`), which are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn events_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(9) // Replenish 1 token every 9 seconds (~100/15 min)
        .burst_size(100) // Allow burst of 100 events
        .finish()
        .expect("rate limiter config with per_second(9) and burst_size(100) is valid");
    GovernorLayer::new(Arc::new(config))
}

/// Create rate limiter for the contact form: 5 submissions per hour per IP.
///
/// Configuration: 1 token every 720 seconds (replenish), burst of 5. The
/// sixth submission inside an hour is rejected with 429.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(720)` and `burst_size(5)`), which are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn contact_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(720) // Replenish 1 token every 720 seconds (5/hour)
        .burst_size(5) // Allow burst of 5 submissions
        .finish()
        .expect("rate limiter config with per_second(720) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}
