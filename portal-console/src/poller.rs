//! Notification Poller - fixed-interval unread-count refresh
//!
//! Re-fetches the first inbox page on a fixed interval and publishes the
//! derived unread count for the header badge. A tick that overlaps a
//! user-triggered load of the same page coalesces through the cache's
//! in-flight de-duplication instead of issuing a second request.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::notifications::NotificationInbox;

/// Default polling cadence for the header badge
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Unread-count poller
pub struct NotificationPoller {
    inbox: Arc<NotificationInbox>,
    poll_interval: Duration,
    unread_tx: watch::Sender<usize>,
}

impl NotificationPoller {
    /// Create a poller and the receiver the presentation layer watches
    pub fn new(
        inbox: Arc<NotificationInbox>,
        poll_interval: Duration,
    ) -> (Self, watch::Receiver<usize>) {
        let (unread_tx, unread_rx) = watch::channel(0);
        (
            Self {
                inbox,
                poll_interval,
                unread_tx,
            },
            unread_rx,
        )
    }

    /// Run the polling loop until `cancel` fires
    ///
    /// Poll failures are logged and surfaced on the next successful tick;
    /// the loop itself never gives up.
    pub async fn run(self, cancel: CancellationToken) {
        let mut ticker = interval(self.poll_interval);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("notification poller stopped");
                    return;
                }
                _ = ticker.tick() => {}
            }

            match self.inbox.refresh(1).await {
                Ok(_) => {
                    let count = self.inbox.unread_count(1).await;
                    let _ = self.unread_tx.send(count);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "notification poll failed");
                }
            }
        }
    }
}
