//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short link with its redirect target and serving state.
///
/// Maps a unique slug to its original URL. `profile_id` points at the
/// owning bio page when the link belongs to one; standalone short links
/// carry `None`. `is_active` controls whether the link is served: the
/// owner can toggle it off without deleting the record.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub original_url: String,
    pub profile_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        slug: String,
        original_url: String,
        profile_id: Option<i64>,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            original_url,
            profile_id,
            is_active,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            None,
            true,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.slug, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert!(link.profile_id.is_none());
        assert!(link.is_active);
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_link_with_profile() {
        let link = Link::new(
            5,
            "bio1".to_string(),
            "https://example.com".to_string(),
            Some(42),
            true,
            Utc::now(),
        );

        assert_eq!(link.slug, "bio1");
        assert_eq!(link.profile_id, Some(42));
    }

    #[test]
    fn test_deactivated_link() {
        let link = Link::new(
            1,
            "off1".to_string(),
            "https://example.com".to_string(),
            None,
            false,
            Utc::now(),
        );
        assert!(!link.is_active);
    }
}
