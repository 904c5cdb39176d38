//! Slug resolution and serving decision for the redirect path.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Terminal decision for one redirect request.
///
/// Exactly one of three outcomes per request: the slug is unknown, the
/// link exists but its owner turned it off, or the link is served.
#[derive(Debug, Clone)]
pub enum RedirectOutcome {
    /// No link carries this slug. Deleted links resolve here too.
    NotFound,
    /// The link exists but `is_active` is false. Served as an
    /// informational page; no redirect, no click event.
    Disabled(Link),
    /// The link is active and should be redirected to, with a click
    /// event recorded.
    Redirect(Link),
}

/// Service resolving slugs to serving decisions.
///
/// Wraps the read-only half of the redirect path: an exact slug lookup
/// followed by the availability gate. The store is injected as a trait
/// object so tests can substitute a fake.
pub struct RedirectService {
    link_repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Resolves a slug to its serving decision.
    ///
    /// Absence is a normal outcome, not an error: only store faults
    /// produce `Err`, and those must surface as server errors rather
    /// than masquerade as not-found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the lookup itself fails.
    pub async fn resolve_slug(&self, slug: &str) -> Result<RedirectOutcome, AppError> {
        let link = self.link_repository.find_by_slug(slug).await?;
        Ok(availability_gate(link))
    }
}

/// Decides whether a resolved link may be served.
///
/// Pure function over the lookup result; no state, no I/O.
pub fn availability_gate(link: Option<Link>) -> RedirectOutcome {
    match link {
        None => RedirectOutcome::NotFound,
        Some(link) if !link.is_active => RedirectOutcome::Disabled(link),
        Some(link) => RedirectOutcome::Redirect(link),
    }
}
