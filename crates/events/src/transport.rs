//! Delivery of auth transitions to the server's session sync endpoint.
//!
//! [`HttpSyncTransport`] POSTs `{event, session}` as JSON to
//! `{base_url}/auth/sync`. Its HTTP client keeps a cookie store, so the
//! session cookies the server sets are sent on every later request made
//! through the same client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::bus::AuthStateChange;

/// HTTP request timeout for a single sync call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("Sync endpoint returned HTTP {0}")]
    HttpStatus(u16),

    /// The server processed the call but reported failure.
    #[error("Sync rejected: {0}")]
    Rejected(String),
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Forwards one transition to the server.
#[async_trait]
pub trait SyncTransport: Send + Sync {
    async fn send(&self, change: &AuthStateChange) -> Result<(), SyncError>;
}

#[derive(Debug, Deserialize)]
struct SyncResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct HttpSyncTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSyncTransport {
    /// Create a transport for the site at `base_url` with a cookie-storing client.
    pub fn new(base_url: &str) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use a caller-supplied client, e.g. one shared with page requests.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/auth/sync", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SyncTransport for HttpSyncTransport {
    async fn send(&self, change: &AuthStateChange) -> Result<(), SyncError> {
        let payload = serde_json::json!({
            "event": change.event,
            "session": change.session,
        });

        let response = self.client.post(&self.endpoint).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(SyncError::HttpStatus(response.status().as_u16()));
        }

        let body: SyncResponse = response.json().await?;
        if !body.success {
            return Err(SyncError::Rejected(
                body.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
