//! Click event model for asynchronous click tracking.

use crate::domain::entities::{Link, NewClick};
use crate::utils::request_meta::RequestMeta;

/// An in-memory representation of a click event for async processing.
///
/// Used to pass attribution data from the redirect handler to the
/// background worker via a channel. This decouples the HTTP response from
/// database writes, allowing fast redirects without blocking.
///
/// # Design
///
/// - `link_id` and `profile_id` are denormalized from the link at click
///   time, so the worker needs no further lookups
/// - Metadata fields carry their fallback markers (`"direct"`,
///   `"unknown"`) instead of options; the record is complete by
///   construction
///
/// # Usage Flow
///
/// 1. Created in the redirect handler with request metadata
/// 2. Sent to channel (non-blocking)
/// 3. Processed by [`crate::domain::click_worker::run_click_worker`]
/// 4. Converted to [`crate::domain::entities::NewClick`] for persistence
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub profile_id: Option<i64>,
    pub user_agent: String,
    pub referrer: String,
    pub country: String,
    pub device_type: String,
}

impl ClickEvent {
    /// Creates a click event for a served link from extracted request
    /// metadata.
    pub fn new(link: &Link, meta: RequestMeta) -> Self {
        Self {
            link_id: link.id,
            profile_id: link.profile_id,
            user_agent: meta.user_agent,
            referrer: meta.referrer,
            country: meta.country,
            device_type: meta.device_type.as_str().to_string(),
        }
    }
}

impl From<ClickEvent> for NewClick {
    fn from(ev: ClickEvent) -> Self {
        NewClick {
            link_id: ev.link_id,
            profile_id: ev.profile_id,
            user_agent: ev.user_agent,
            referrer: ev.referrer,
            country: ev.country,
            device_type: ev.device_type,
        }
    }
}
