//! Auth sessions as issued by the identity provider, and the state
//! transitions a client reports for them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// The identity a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: DbId,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tokens plus identity for one signed-in user.
///
/// Unknown fields sent by the identity provider are ignored. `Debug` never
/// prints token values.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Access token expiry as a UTC unix timestamp.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

/// Auth state transitions reported by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    /// A stored session was restored when the client started.
    InitialSession,
    SignedIn,
    SignedOut,
}

impl AuthEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialSession => "INITIAL_SESSION",
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "INITIAL_SESSION" => Some(Self::InitialSession),
            "SIGNED_IN" => Some(Self::SignedIn),
            "SIGNED_OUT" => Some(Self::SignedOut),
            _ => None,
        }
    }
}

impl fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a transition for duplicate suppression: the event tag plus the
/// access token it carried (if any).
pub fn sync_key(event: AuthEvent, session: Option<&Session>) -> String {
    match session {
        Some(s) => format!("{event}-{}", s.access_token),
        None => format!("{event}-"),
    }
}
