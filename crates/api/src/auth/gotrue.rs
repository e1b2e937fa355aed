//! HTTP client for a GoTrue-compatible auth API (`{SUPABASE_URL}/auth/v1`).

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use spacetour_core::session::{Session, SessionUser};

use super::identity::{IdentityError, IdentityProvider, SignUpOutcome};

/// HTTP request timeout for identity provider calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GoTrueClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl GoTrueClient {
    /// Create a client for the project at `project_url` (without `/auth/v1`).
    pub fn new(project_url: &str, anon_key: &str) -> Result<Self, IdentityError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: format!("{}/auth/v1", project_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        })
    }

    fn post(&self, path: &str, bearer: Option<&str>) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{path}", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer.unwrap_or(&self.anon_key))
    }

    async fn token_grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<Session, IdentityError> {
        let response = self
            .post("/token", None)
            .query(&[("grant_type", grant_type)])
            .json(&body)
            .send()
            .await?;
        read_json::<Session>(response).await.map(with_expiry)
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, IdentityError> {
        self.token_grant("password", json!({ "email": email, "password": password }))
            .await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: &str,
    ) -> Result<SignUpOutcome, IdentityError> {
        let response = self
            .post("/signup", None)
            .query(&[("redirect_to", redirect_to)])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let body: serde_json::Value = read_json(response).await?;

        // Without autoconfirm the provider answers with the bare user.
        if body.get("access_token").is_none() {
            return Ok(SignUpOutcome::ConfirmationRequired);
        }
        let session: Session = serde_json::from_value(body)
            .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;
        Ok(SignUpOutcome::SignedIn(with_expiry(session)))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let response = self.post("/logout", Some(access_token)).send().await?;
        check_status(response).await.map(|_| ())
    }

    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), IdentityError> {
        let response = self
            .post("/recover", None)
            .query(&[("redirect_to", redirect_to)])
            .json(&json!({ "email": email }))
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    async fn exchange_code_for_session(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<Session, IdentityError> {
        self.token_grant(
            "pkce",
            json!({ "auth_code": code, "code_verifier": code_verifier.unwrap_or_default() }),
        )
        .await
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, IdentityError> {
        self.token_grant("refresh_token", json!({ "refresh_token": refresh_token }))
            .await
    }

    async fn get_user(&self, access_token: &str) -> Result<SessionUser, IdentityError> {
        let response = self
            .client
            .get(format!("{}/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        read_json(response).await
    }
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

/// The error shapes the provider uses across versions.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, IdentityError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status.is_server_error() {
        return Err(IdentityError::Upstream(status.as_u16()));
    }

    let body: ErrorBody = response.json().await.unwrap_or_default();
    let message = body
        .into_message()
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request rejected").to_string());
    Err(IdentityError::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, IdentityError> {
    check_status(response)
        .await?
        .json()
        .await
        .map_err(|e| IdentityError::InvalidResponse(e.to_string()))
}

/// Older provider versions omit `expires_at`; derive it from `expires_in`.
fn with_expiry(mut session: Session) -> Session {
    if session.expires_at.is_none() {
        session.expires_at = session
            .expires_in
            .map(|secs| Utc::now().timestamp() + secs);
    }
    session
}
