//! In-process auth event bus backed by a `tokio::sync::broadcast` channel.
//!
//! The client's auth layer publishes an [`AuthStateChange`] for every
//! transition; observers hold a [`Subscription`] for as long as they are
//! mounted and drop it (or call [`Subscription::unsubscribe`]) on teardown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spacetour_core::session::{AuthEvent, Session};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// AuthStateChange
// ---------------------------------------------------------------------------

/// One auth state transition and the session it left behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStateChange {
    pub event: AuthEvent,

    /// `None` after sign-out or when no stored session was found.
    pub session: Option<Session>,

    /// When the transition was observed (UTC).
    pub timestamp: DateTime<Utc>,
}

impl AuthStateChange {
    pub fn new(event: AuthEvent, session: Option<Session>) -> Self {
        Self {
            event,
            session,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// AuthEventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// Fan-out bus for auth transitions. Share via `Arc<AuthEventBus>`.
pub struct AuthEventBus {
    sender: broadcast::Sender<AuthStateChange>,
}

impl AuthEventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest unread transitions are dropped and
    /// slow subscribers skip ahead.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a transition to all current subscribers.
    ///
    /// Returns the number of subscribers that will see it.
    pub fn publish(&self, change: AuthStateChange) -> usize {
        // A send error only means there are no subscribers.
        self.sender.send(change).unwrap_or(0)
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for AuthEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// A live subscription to an [`AuthEventBus`]. Dropping it unsubscribes.
pub struct Subscription {
    receiver: broadcast::Receiver<AuthStateChange>,
}

impl Subscription {
    /// Wait for the next transition.
    ///
    /// Returns `None` once the bus has been dropped. Transitions lost to
    /// buffer overflow are logged and skipped.
    pub async fn recv(&mut self) -> Option<AuthStateChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) => return Some(change),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Auth event subscriber lagged, skipping transitions");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Detach from the bus.
    pub fn unsubscribe(self) {}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
