//! Coarse device classification from the User-Agent header.

/// Two-way device class derived from the user-agent string.
///
/// Deliberately coarse: mobile browsers advertise a `Mobile` token, so a
/// case-insensitive substring check covers them. Everything else,
/// including bots and unknown agents, counts as desktop. This is not
/// device fingerprinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Mobile,
    Desktop,
}

impl DeviceType {
    /// The string form stored in click records.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Desktop => "desktop",
        }
    }
}

/// Classifies a user-agent string as mobile or desktop.
pub fn classify_device(user_agent: &str) -> DeviceType {
    if user_agent.to_ascii_lowercase().contains("mobile") {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}
