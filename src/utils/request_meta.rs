//! Attribution metadata extraction from HTTP request headers.

use axum::http::{HeaderMap, header};

use crate::utils::device::{DeviceType, classify_device};

/// Geolocation headers supplied by the hosting edge layer, in priority
/// order. First non-empty value wins.
const COUNTRY_HEADERS: [&str; 3] = ["x-vercel-ip-country", "cf-ipcountry", "x-country-code"];

/// Marker stored when no Referer header is present.
pub const REFERRER_DIRECT: &str = "direct";

/// Marker stored when a metadata header is absent or unreadable.
pub const UNKNOWN: &str = "unknown";

/// Best-effort attribution metadata for one request.
///
/// Every field carries a value; absent headers degrade to their marker
/// strings. Extraction never fails the request.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    pub user_agent: String,
    pub referrer: String,
    pub country: String,
    pub device_type: DeviceType,
}

impl RequestMeta {
    /// Derives attribution metadata from request headers.
    ///
    /// - `user_agent`: raw `User-Agent` value, else `"unknown"`
    /// - `referrer`: `Referer` value, else `"direct"`
    /// - `country`: first non-empty edge geolocation header, else
    ///   `"unknown"`
    /// - `device_type`: classified from the user-agent string
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(UNKNOWN)
            .to_string();

        let referrer = headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(REFERRER_DIRECT)
            .to_string();

        let country = country_from_headers(headers);
        let device_type = classify_device(&user_agent);

        Self {
            user_agent,
            referrer,
            country,
            device_type,
        }
    }
}

/// Resolves the visitor country from edge-provided headers.
///
/// Tries each known header name in order and takes the first non-empty
/// value. The signal is optional: with no edge layer in front, the result
/// is `"unknown"`.
fn country_from_headers(headers: &HeaderMap) -> String {
    COUNTRY_HEADERS
        .iter()
        .filter_map(|name| headers.get(*name))
        .filter_map(|v| v.to_str().ok())
        .find(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}
