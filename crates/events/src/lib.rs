//! Client-side auth session bridge.
//!
//! Mirrors a client's auth state into server-readable cookies:
//!
//! - [`AuthEventBus`] -- publish/subscribe hub for [`AuthStateChange`]s,
//!   backed by `tokio::sync::broadcast`.
//! - [`SessionSync`] -- background worker that deduplicates and debounces
//!   transitions before forwarding them.
//! - [`SyncTransport`] / [`HttpSyncTransport`] -- delivery of a transition to
//!   the server's `/auth/sync` endpoint.

pub mod bus;
pub mod sync;
pub mod transport;

pub use bus::{AuthEventBus, AuthStateChange, Subscription};
pub use sync::SessionSync;
pub use transport::{HttpSyncTransport, SyncError, SyncTransport};
