//! Background worker draining the click event channel.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::ClickRepository;

/// Consumes click events and persists them, one attempt per event.
///
/// Insert failures are logged and dropped: analytics completeness is
/// traded for redirect availability, so nothing here retries or
/// propagates. The worker exits when all senders are gone.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    clicks: Arc<dyn ClickRepository>,
) {
    while let Some(ev) = rx.recv().await {
        let link_id = ev.link_id;
        if let Err(e) = clicks.insert_click(ev.into()).await {
            tracing::warn!("failed to record click for link {link_id}: {e}");
        }
    }

    tracing::debug!("click worker stopped: channel closed");
}
