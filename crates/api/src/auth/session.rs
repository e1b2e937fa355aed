//! Server-side session resolution from a token pair.

use axum::http::HeaderMap;
use spacetour_core::session::{Session, SessionUser};

use super::cookies::CookieTokens;
use super::identity::{IdentityError, IdentityProvider};

/// Outcome of validating a token pair.
#[derive(Debug, Clone)]
pub enum Verified {
    /// The access token is still valid.
    Current(SessionUser),
    /// The access token was rejected and the refresh token produced a new
    /// session; its cookies should be sent back.
    Refreshed(Session),
}

impl Verified {
    pub fn user(&self) -> &SessionUser {
        match self {
            Self::Current(user) => user,
            Self::Refreshed(session) => &session.user,
        }
    }

    pub fn refreshed(&self) -> Option<&Session> {
        match self {
            Self::Current(_) => None,
            Self::Refreshed(session) => Some(session),
        }
    }
}

/// Validate `access_token`, falling back to `refresh_token` when the access
/// token is missing or rejected.
///
/// Returns `Ok(None)` when neither token yields a session. Transport and
/// provider failures are errors rather than "signed out".
pub async fn verify_tokens(
    identity: &dyn IdentityProvider,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> Result<Option<Verified>, IdentityError> {
    if let Some(token) = access_token {
        match identity.get_user(token).await {
            Ok(user) => return Ok(Some(Verified::Current(user))),
            Err(e) if e.is_rejection() => {
                tracing::debug!(error = %e, "Access token rejected, trying refresh");
            }
            Err(e) => return Err(e),
        }
    }

    let Some(token) = refresh_token else {
        return Ok(None);
    };

    match identity.refresh_session(token).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, "Session refreshed");
            Ok(Some(Verified::Refreshed(session)))
        }
        Err(e) if e.is_rejection() => {
            tracing::debug!(error = %e, "Refresh token rejected");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Resolve the session carried by a request's cookies.
pub async fn resolve_from_headers(
    identity: &dyn IdentityProvider,
    headers: &HeaderMap,
) -> Result<Option<Verified>, IdentityError> {
    let tokens = CookieTokens::from_headers(headers);
    if tokens.is_empty() {
        return Ok(None);
    }
    verify_tokens(
        identity,
        tokens.access_token.as_deref(),
        tokens.refresh_token.as_deref(),
    )
    .await
}
