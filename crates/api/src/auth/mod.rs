//! Identity provider client and cookie-based session mirroring.
//!
//! - [`identity`] -- the [`identity::IdentityProvider`] trait and its errors.
//! - [`gotrue`] -- HTTP implementation against the hosted auth API.
//! - [`cookies`] -- building and reading the session cookies.
//! - [`session`] -- validating (and refreshing) a request's session.

pub mod cookies;
pub mod gotrue;
pub mod identity;
pub mod session;
