//! Request extractors.
//!
//! - [`auth::MaybeSession`] -- resolves the cookie session, refreshing it when needed.

pub mod auth;
