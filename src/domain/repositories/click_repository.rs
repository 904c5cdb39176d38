//! Repository trait for click event persistence.

use crate::domain::entities::NewClick;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for appending click events.
///
/// Inserts are dispatched by the background worker, not by request
/// handlers, and their outcome never reaches the visitor: a failed insert
/// is logged and dropped.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Callers on the
    /// click pipeline swallow this error; it must not propagate to the
    /// redirect.
    async fn insert_click(&self, new_click: NewClick) -> Result<(), AppError>;
}
