//! The identity provider seam.
//!
//! Handlers talk to the hosted auth service through [`IdentityProvider`] so
//! tests can swap in an in-memory implementation. The production
//! implementation is [`super::gotrue::GoTrueClient`].

use async_trait::async_trait;
use spacetour_core::session::{Session, SessionUser};

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider understood the request and refused it (bad credentials,
    /// expired token, invalid code, rate limit).
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider failed with a server-side status.
    #[error("Identity provider returned HTTP {0}")]
    Upstream(u16),

    /// The request never completed (network, DNS, timeout).
    #[error("Identity provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected identity provider response: {0}")]
    InvalidResponse(String),
}

impl IdentityError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Result of a signup call.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    /// Email confirmation is disabled; the user is signed in immediately.
    SignedIn(Session),
    /// A confirmation email was sent; no session until the link is followed.
    ConfirmationRequired,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<Session, IdentityError>;

    /// Register a user; the confirmation link points at `redirect_to`.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: &str,
    ) -> Result<SignUpOutcome, IdentityError>;

    /// Revoke the refresh tokens behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;

    /// Send a password reset email whose link points at `redirect_to`.
    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), IdentityError>;

    /// Exchange an authorization code from an email or OAuth redirect.
    async fn exchange_code_for_session(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<Session, IdentityError>;

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, IdentityError>;

    /// Validate an access token and return the user it belongs to.
    async fn get_user(&self, access_token: &str) -> Result<SessionUser, IdentityError>;
}
