//! Session cookies mirrored from the identity provider session.
//!
//! Both tokens travel as HTTP-only, `SameSite=Lax` cookies on path `/`.
//! Header values are built with the `cookie` crate for correct formatting.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::AppendHeaders;
use cookie::time::{Duration, OffsetDateTime};
use cookie::{Cookie, SameSite};
use spacetour_core::session::Session;

use crate::config::ServerConfig;

pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";
pub const REFRESH_TOKEN_COOKIE: &str = "sb-refresh-token";
/// PKCE verifier stored by the client before an OAuth/email redirect.
pub const CODE_VERIFIER_COOKIE: &str = "sb-code-verifier";

/// Cookie attributes derived from server configuration.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
    pub max_age_secs: i64,
}

impl From<&ServerConfig> for CookieSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            secure: config.cookie_secure,
            max_age_secs: config.cookie_max_age_secs,
        }
    }
}

/// `Set-Cookie` values to be appended to a response.
pub type SetCookies = Vec<String>;

/// Build the `Set-Cookie` values that store `session`.
pub fn session_cookies(session: &Session, settings: CookieSettings) -> SetCookies {
    [
        (ACCESS_TOKEN_COOKIE, session.access_token.as_str()),
        (REFRESH_TOKEN_COOKIE, session.refresh_token.as_str()),
    ]
    .into_iter()
    .map(|(name, value)| {
        Cookie::build((name, value))
            .path("/")
            .max_age(Duration::seconds(settings.max_age_secs))
            .secure(settings.secure)
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
            .to_string()
    })
    .collect()
}

/// Build the `Set-Cookie` values that remove the session cookies.
pub fn clear_session_cookies(settings: CookieSettings) -> SetCookies {
    [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE]
        .into_iter()
        .map(|name| expired(name, settings))
        .collect()
}

/// Build the `Set-Cookie` value that removes the PKCE verifier.
pub fn clear_code_verifier(settings: CookieSettings) -> String {
    expired(CODE_VERIFIER_COOKIE, settings)
}

fn expired(name: &str, settings: CookieSettings) -> String {
    Cookie::build((name, ""))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .max_age(Duration::ZERO)
        .secure(settings.secure)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
        .to_string()
}

/// Wrap `Set-Cookie` values so they can be returned from a handler.
pub fn append(cookies: SetCookies) -> AppendHeaders<Vec<(axum::http::HeaderName, String)>> {
    AppendHeaders(cookies.into_iter().map(|c| (SET_COOKIE, c)).collect())
}

/// Read a cookie from every `Cookie` header of a request.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

/// Token pair carried by a request's cookies. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl CookieTokens {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            access_token: read_cookie(headers, ACCESS_TOKEN_COOKIE),
            refresh_token: read_cookie(headers, REFRESH_TOKEN_COOKIE),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}
