//! Shared application state injected into HTTP handlers.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::RedirectService;
use crate::domain::click_event::ClickEvent;

/// Per-request shared state.
///
/// The store sits behind the service's repository trait, so tests build a
/// state over in-memory fakes. The click sender is the write half of the
/// fire-and-forget pipeline; the worker owns the read half.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    /// Creates application state from its components.
    pub fn new(
        redirect_service: Arc<RedirectService>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            redirect_service,
            click_sender,
        }
    }
}
