//! `GET /auth/callback`: finish an email-link or OAuth sign-in.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::auth::cookies::{self, CODE_VERIFIER_COOKIE};
use crate::state::AppState;

/// Where a failed code exchange is sent.
pub const AUTH_ERROR_REDIRECT: &str = "/?error=auth";

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub next: Option<String>,
}

/// Accept `next` only when it is a path on this site.
///
/// Absolute URLs, protocol-relative `//host` paths and backslash variants
/// are replaced with `/`.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}

/// GET /auth/callback?code=&next=
pub async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let next = safe_next(query.next.as_deref()).to_string();

    let Some(code) = query.code.filter(|c| !c.is_empty()) else {
        tracing::debug!("Auth callback without code");
        return Redirect::to(&next).into_response();
    };

    let verifier = cookies::read_cookie(&headers, CODE_VERIFIER_COOKIE);
    match state
        .identity
        .exchange_code_for_session(&code, verifier.as_deref())
        .await
    {
        Ok(session) => {
            tracing::info!(user_id = %session.user.id, "Auth code exchanged for session");
            let settings = state.cookie_settings();
            let mut set_cookies = cookies::session_cookies(&session, settings);
            if verifier.is_some() {
                set_cookies.push(cookies::clear_code_verifier(settings));
            }
            (cookies::append(set_cookies), Redirect::to(&next)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Auth code exchange failed");
            Redirect::to(AUTH_ERROR_REDIRECT).into_response()
        }
    }
}
