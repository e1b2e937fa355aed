//! `POST /auth/sync`: mirror a client auth transition into session cookies.
//!
//! Accepts either a JSON body `{event, session}` or a form-encoded body
//! `event=...&session=<JSON>`. Always answers with `{success, error?}`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use spacetour_core::session::{AuthEvent, Session};

use crate::auth::cookies::{self, ACCESS_TOKEN_COOKIE};
use crate::auth::session::{verify_tokens, Verified};
use crate::response::AuthResult;
use crate::state::AppState;

/// A decoded sync request. `event` is kept raw so unknown tags can be ignored.
#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    pub event: String,
    #[serde(default)]
    pub session: Option<Session>,
}

/// Decode a sync body according to its content type.
pub fn parse_sync_body(content_type: Option<&str>, body: &[u8]) -> Result<SyncRequest, String> {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    if is_json {
        return serde_json::from_slice(body).map_err(|e| format!("Invalid JSON body: {e}"));
    }

    let text = std::str::from_utf8(body).map_err(|_| "Body is not valid UTF-8".to_string())?;
    if !text.contains("event=") {
        return serde_json::from_str(text).map_err(|e| format!("Invalid JSON body: {e}"));
    }

    let mut event = None;
    let mut session = None;
    for (key, value) in url::form_urlencoded::parse(body) {
        match key.as_ref() {
            "event" => event = Some(value.into_owned()),
            "session" if !value.is_empty() && value != "null" => {
                session = Some(
                    serde_json::from_str::<Session>(&value)
                        .map_err(|e| format!("Invalid session field: {e}"))?,
                );
            }
            _ => {}
        }
    }

    Ok(SyncRequest {
        event: event.ok_or_else(|| "Missing event field".to_string())?,
        session,
    })
}

/// POST /auth/sync
pub async fn sync(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let request = match parse_sync_body(content_type, &body) {
        Ok(request) => request,
        Err(message) => {
            tracing::warn!(error = %message, "Rejected malformed auth sync request");
            return failure(StatusCode::BAD_REQUEST, message);
        }
    };

    let Some(event) = AuthEvent::parse(&request.event) else {
        tracing::debug!(event = %request.event, "Ignoring unhandled auth event");
        return Json(AuthResult::ok()).into_response();
    };

    let settings = state.cookie_settings();

    match (event, request.session) {
        (AuthEvent::SignedIn | AuthEvent::InitialSession, Some(session)) => {
            let verified = verify_tokens(
                state.identity.as_ref(),
                Some(session.access_token.as_str()),
                Some(session.refresh_token.as_str()),
            )
            .await;

            let stored = match verified {
                Ok(Some(Verified::Current(_))) => session,
                Ok(Some(Verified::Refreshed(refreshed))) => refreshed,
                Ok(None) => {
                    tracing::warn!(%event, "Session tokens rejected during sync");
                    return failure(StatusCode::UNAUTHORIZED, "Failed to set server session");
                }
                Err(e) => {
                    tracing::error!(%event, error = %e, "Auth sync failed");
                    return failure(StatusCode::BAD_GATEWAY, "Failed to sync auth state");
                }
            };

            tracing::info!(%event, user_id = %stored.user.id, "Server session set");
            (
                cookies::append(cookies::session_cookies(&stored, settings)),
                Json(AuthResult::ok()),
            )
                .into_response()
        }
        (AuthEvent::SignedIn, None) => {
            failure(StatusCode::BAD_REQUEST, "SIGNED_IN requires a session")
        }
        (AuthEvent::InitialSession, None) => Json(AuthResult::ok()).into_response(),
        (AuthEvent::SignedOut, session) => {
            let token = session
                .map(|s| s.access_token)
                .or_else(|| cookies::read_cookie(&headers, ACCESS_TOKEN_COOKIE));
            if let Some(token) = token {
                if let Err(e) = state.identity.sign_out(&token).await {
                    tracing::warn!(error = %e, "Upstream sign-out failed, clearing cookies anyway");
                }
            }

            tracing::info!("Server session cleared");
            (
                cookies::append(cookies::clear_session_cookies(settings)),
                Json(AuthResult::ok()),
            )
                .into_response()
        }
    }
}

fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(AuthResult::failed(message))).into_response()
}
