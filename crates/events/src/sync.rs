//! Mirrors client auth transitions to the server session.
//!
//! [`SessionSync`] consumes a bus [`Subscription`], drops transitions it has
//! already forwarded (same event tag and access token), and waits for the
//! debounce window to go quiet before forwarding the most recent transition
//! through a [`SyncTransport`]. Delivery failures are logged and never stop
//! the loop; the client session stays as it is.

use std::sync::Arc;
use std::time::Duration;

use spacetour_core::session::sync_key;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::bus::{AuthStateChange, Subscription};
use crate::transport::SyncTransport;

/// Quiet period a transition must survive before it is forwarded.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

pub struct SessionSync<T: SyncTransport + ?Sized> {
    transport: Arc<T>,
    debounce: Duration,
    /// Key of the most recently accepted transition.
    last_key: Option<String>,
}

impl<T: SyncTransport + ?Sized + 'static> SessionSync<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            debounce: DEFAULT_DEBOUNCE,
            last_key: None,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Run the sync loop on a background task until `cancel` fires or the
    /// bus is dropped. A transition still waiting out its debounce window at
    /// that point is discarded, and an in-flight delivery is abandoned.
    pub fn spawn(self, subscription: Subscription, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(subscription, cancel))
    }

    pub async fn run(mut self, mut subscription: Subscription, cancel: CancellationToken) {
        tracing::info!(debounce_ms = self.debounce.as_millis() as u64, "Session sync started");

        let mut pending: Option<AuthStateChange> = None;
        let timer = tokio::time::sleep(self.debounce);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    if let Some(change) = pending.take() {
                        tracing::debug!(event = %change.event, "Discarding pending session sync");
                    }
                    break;
                }
                received = subscription.recv() => {
                    let Some(change) = received else { break };

                    let key = sync_key(change.event, change.session.as_ref());
                    if self.last_key.as_deref() == Some(key.as_str()) {
                        tracing::debug!(event = %change.event, "Duplicate auth transition, skipping");
                        continue;
                    }

                    // Recorded before the window elapses, so a repeat that
                    // arrives inside the window is suppressed too.
                    self.last_key = Some(key);
                    pending = Some(change);
                    timer.as_mut().reset(Instant::now() + self.debounce);
                }
                _ = &mut timer, if pending.is_some() => {
                    let Some(change) = pending.take() else { continue };
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            tracing::debug!(event = %change.event, "Session sync cancelled mid-delivery");
                            break;
                        }
                        () = self.forward(&change) => {}
                    }
                }
            }
        }

        tracing::info!("Session sync stopped");
    }

    async fn forward(&self, change: &AuthStateChange) {
        match self.transport.send(change).await {
            Ok(()) => {
                tracing::debug!(event = %change.event, "Server session synced");
            }
            Err(e) => {
                tracing::warn!(event = %change.event, error = %e, "Failed to sync server session");
            }
        }
    }
}
