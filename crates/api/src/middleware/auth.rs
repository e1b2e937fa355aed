//! Cookie-session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use spacetour_core::session::SessionUser;

use crate::auth::cookies::{self, SetCookies};
use crate::auth::session::{resolve_from_headers, Verified};
use crate::error::AppError;
use crate::state::AppState;

/// The session carried by the request's cookies, if any.
///
/// Never rejects an anonymous request; handlers decide what to do without a
/// user. Fails only when the identity provider cannot be reached.
///
/// ```ignore
/// async fn my_handler(MaybeSession(session): MaybeSession) -> Response {
///     match session {
///         Some(s) => tracing::info!(user_id = %s.user().id, "signed in"),
///         None => tracing::info!("anonymous"),
///     }
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<Verified>);

impl MaybeSession {
    pub fn user(&self) -> Option<&SessionUser> {
        self.0.as_ref().map(Verified::user)
    }

    /// `Set-Cookie` values for a session refreshed during resolution.
    pub fn refreshed_cookies(&self, state: &AppState) -> SetCookies {
        self.0
            .as_ref()
            .and_then(Verified::refreshed)
            .map(|session| cookies::session_cookies(session, state.cookie_settings()))
            .unwrap_or_default()
    }
}

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let verified = resolve_from_headers(state.identity.as_ref(), &parts.headers).await?;
        Ok(MaybeSession(verified))
    }
}
