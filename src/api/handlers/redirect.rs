//! Handler for public short link redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::RedirectOutcome;
use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_meta::RequestMeta;

/// Template for the deactivated-link informational page.
///
/// Renders `templates/link_disabled.html`, telling the visitor the link
/// was turned off by its owner. Served with 200: deactivation is a normal
/// state, not an error.
#[derive(Template, WebTemplate)]
#[template(path = "link_disabled.html")]
pub struct LinkDisabledTemplate {}

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}` — public, unauthenticated.
///
/// # Request Flow
///
/// 1. Resolve the slug (exact, case-sensitive lookup)
/// 2. Gate on availability: unknown slug → 404, deactivated → 200 HTML
/// 3. Derive attribution metadata from headers
/// 4. Enqueue the click event (fire-and-forget)
/// 5. Return 307 Temporary Redirect to the stored URL, verbatim
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing. If
/// the queue is full or the worker is gone, the click is dropped; the
/// redirect is never delayed or failed by the recorder. Deactivated links
/// record no event.
///
/// # Errors
///
/// Returns 404 Not Found with the plain-text body `Link not found` when
/// no link carries the slug. A failing store lookup surfaces as a server
/// error instead; outages must not read as dead links.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    match state.redirect_service.resolve_slug(&slug).await? {
        RedirectOutcome::NotFound => {
            tracing::debug!("slug not found: {slug}");
            Err(AppError::not_found("Link not found"))
        }
        RedirectOutcome::Disabled(link) => {
            tracing::debug!("slug disabled by owner: {}", link.slug);
            Ok(LinkDisabledTemplate {}.into_response())
        }
        RedirectOutcome::Redirect(link) => {
            let meta = RequestMeta::from_headers(&headers);
            let event = ClickEvent::new(&link, meta);

            let _ = state.click_sender.try_send(event);

            Ok(Redirect::temporary(&link.original_url).into_response())
        }
    }
}
