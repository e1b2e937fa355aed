//! Space Tourism domain core.
//!
//! Shared types and pure rules used by the database layer, the HTTP API and
//! the session bridge:
//!
//! - [`content`] -- destination, crew and technology records.
//! - [`fallback`] -- built-in content served when the backend is unavailable.
//! - [`retry`] -- bounded timeout + fixed-delay retry policy.
//! - [`mission`], [`achievement`], [`profile`] -- mission control rules.
//! - [`session`] -- auth sessions and state-transition events.

pub mod achievement;
pub mod content;
pub mod error;
pub mod fallback;
pub mod mission;
pub mod profile;
pub mod retry;
pub mod session;
pub mod types;
