//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a visitor is redirected through a link.
///
/// Append-only attribution record. Never mutated after creation; it may
/// outlive the link it references (no foreign-key cascade), so orphaned
/// rows are acceptable.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub profile_id: Option<i64>,
    pub user_agent: String,
    pub referrer: String,
    pub country: String,
    pub device_type: String,
    pub clicked_at: DateTime<Utc>,
}

/// Input data for recording a new click event.
///
/// `profile_id` is denormalized from the link at click time. The metadata
/// fields always carry a value: absent headers are stored as their marker
/// strings (`"direct"`, `"unknown"`) rather than NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClick {
    pub link_id: i64,
    pub profile_id: Option<i64>,
    pub user_agent: String,
    pub referrer: String,
    pub country: String,
    pub device_type: String,
}
