//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for resolving short links.
///
/// The redirect path is read-only: the only operation it needs from the
/// store is an exact slug lookup. Link creation and management happen in
/// the surrounding application, outside this service.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its slug.
    ///
    /// The match is exact and case-sensitive against the unique slug
    /// column.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if no link has this slug — absence is not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Connectivity
    /// failures must surface as errors, never as `Ok(None)`.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;
}
