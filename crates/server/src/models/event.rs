//! Analytics event domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-form event metadata supplied by the client.
pub type EventMetadata = serde_json::Map<String, serde_json::Value>;

/// A recorded analytics event. Append-only; never updated or deleted.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub event_type: String,
    pub page: String,
    pub metadata: EventMetadata,
    pub timestamp: DateTime<Utc>,
}

/// Aggregated event counts grouped by (event type, UTC calendar day).
///
/// `day` is an ISO date string (`YYYY-MM-DD`). Day boundaries are UTC in both
/// store implementations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventStat {
    pub event_type: String,
    pub day: String,
    pub count: i64,
}
