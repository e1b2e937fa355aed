//! Shared harness for API integration tests.
//!
//! The router is built with [`build_app_router`], so tests exercise the same
//! middleware stack as production. The database and the identity provider
//! are replaced with in-memory fakes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use spacetour_api::auth::identity::{IdentityError, IdentityProvider, SignUpOutcome};
use spacetour_api::config::ServerConfig;
use spacetour_api::router::build_app_router;
use spacetour_api::services::content::ContentService;
use spacetour_api::state::AppState;
use spacetour_core::content::{CrewMember, Destination, Technology};
use spacetour_core::mission::{Mission, MissionStatus};
use spacetour_core::retry::RetryPolicy;
use spacetour_core::session::{Session, SessionUser};
use spacetour_core::types::DbId;
use spacetour_db::models::achievement::JoinedAchievement;
use spacetour_db::models::profile::CreateUserProfile;
use spacetour_db::{ContentStore, MissionControlStore};

pub const PILOT_EMAIL: &str = "pilot@example.com";
pub const PILOT_PASSWORD: &str = "correct-horse";

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn pilot() -> SessionUser {
    SessionUser {
        id: uuid::Uuid::from_u128(0x5f2b_7c1e_8a61_4a5e_9d0b_3f1c_2e4d_5a6b),
        email: Some(PILOT_EMAIL.to_string()),
    }
}

pub fn session(access_token: &str, refresh_token: &str) -> Session {
    Session {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
        token_type: Some("bearer".to_string()),
        expires_in: Some(3600),
        expires_at: None,
        user: pilot(),
    }
}

// ---------------------------------------------------------------------------
// Fake identity provider
// ---------------------------------------------------------------------------

/// In-memory identity provider.
///
/// Valid access tokens, refresh tokens and auth codes are registered up
/// front; everything else is rejected like the real provider would.
#[derive(Default)]
pub struct FakeIdentity {
    pub(crate) access_tokens: Mutex<HashMap<String, SessionUser>>,
    pub(crate) refresh_tokens: Mutex<HashMap<String, Session>>,
    pub(crate) codes: Mutex<HashMap<String, Session>>,
    pub login_session: Mutex<Option<Session>>,
    pub confirm_signups: bool,
    pub unavailable: AtomicBool,
    pub signed_out: Mutex<Vec<String>>,
    pub reset_requests: Mutex<Vec<(String, String)>>,
    pub signup_redirects: Mutex<Vec<String>>,
    pub code_verifiers: Mutex<Vec<Option<String>>>,
    pub user_lookups: AtomicUsize,
}

impl FakeIdentity {
    /// Accept `session`'s access token as valid.
    pub fn with_session(self, session: &Session) -> Self {
        self.access_tokens
            .lock()
            .unwrap()
            .insert(session.access_token.clone(), session.user.clone());
        self
    }

    /// Accept `refresh_token`, answering with `refreshed`.
    pub fn with_refresh(self, refresh_token: &str, refreshed: Session) -> Self {
        self.access_tokens
            .lock()
            .unwrap()
            .insert(refreshed.access_token.clone(), refreshed.user.clone());
        self.refresh_tokens
            .lock()
            .unwrap()
            .insert(refresh_token.to_string(), refreshed);
        self
    }

    pub fn with_code(self, code: &str, session: Session) -> Self {
        self.codes.lock().unwrap().insert(code.to_string(), session);
        self
    }

    /// Let `PILOT_EMAIL` / `PILOT_PASSWORD` sign in with `session`.
    pub fn with_login(self, session: Session) -> Self {
        *self.login_session.lock().unwrap() = Some(session);
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), IdentityError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(IdentityError::Upstream(503));
        }
        Ok(())
    }
}

fn rejected(message: &str) -> IdentityError {
    IdentityError::Rejected {
        status: 401,
        message: message.to_string(),
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, IdentityError> {
        self.check_available()?;
        match self.login_session.lock().unwrap().clone() {
            Some(session) if email == PILOT_EMAIL && password == PILOT_PASSWORD => Ok(session),
            _ => Err(IdentityError::Rejected {
                status: 400,
                message: "Invalid login credentials".to_string(),
            }),
        }
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        redirect_to: &str,
    ) -> Result<SignUpOutcome, IdentityError> {
        self.check_available()?;
        self.signup_redirects
            .lock()
            .unwrap()
            .push(redirect_to.to_string());
        if self.confirm_signups {
            return Ok(SignUpOutcome::ConfirmationRequired);
        }
        Ok(SignUpOutcome::SignedIn(session("signup-access", "signup-refresh")))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        self.check_available()?;
        self.signed_out.lock().unwrap().push(access_token.to_string());
        Ok(())
    }

    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), IdentityError> {
        self.check_available()?;
        self.reset_requests
            .lock()
            .unwrap()
            .push((email.to_string(), redirect_to.to_string()));
        Ok(())
    }

    async fn exchange_code_for_session(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<Session, IdentityError> {
        self.check_available()?;
        self.code_verifiers
            .lock()
            .unwrap()
            .push(code_verifier.map(str::to_string));
        self.codes
            .lock()
            .unwrap()
            .remove(code)
            .ok_or_else(|| rejected("invalid flow state, no valid flow state found"))
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, IdentityError> {
        self.check_available()?;
        self.refresh_tokens
            .lock()
            .unwrap()
            .get(refresh_token)
            .cloned()
            .ok_or_else(|| rejected("Invalid Refresh Token"))
    }

    async fn get_user(&self, access_token: &str) -> Result<SessionUser, IdentityError> {
        self.check_available()?;
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        self.access_tokens
            .lock()
            .unwrap()
            .get(access_token)
            .cloned()
            .ok_or_else(|| rejected("invalid JWT"))
    }
}

// ---------------------------------------------------------------------------
// Fake store
// ---------------------------------------------------------------------------

/// In-memory content, profile, mission and achievement data.
#[derive(Default)]
pub struct MemoryStore {
    pub destinations: Vec<Destination>,
    pub crew: Vec<CrewMember>,
    pub technologies: Vec<Technology>,
    pub db_down: bool,
    pub profiles: Mutex<HashMap<DbId, DbId>>,
    pub created_profiles: Mutex<Vec<CreateUserProfile>>,
    pub missions: Vec<Mission>,
    pub achievements: Vec<JoinedAchievement>,
}

impl MemoryStore {
    fn check_up(&self) -> Result<(), sqlx::Error> {
        if self.db_down {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check_up()
    }

    async fn destinations(&self) -> Result<Vec<Destination>, sqlx::Error> {
        self.check_up()?;
        Ok(self.destinations.clone())
    }

    async fn crew(&self) -> Result<Vec<CrewMember>, sqlx::Error> {
        self.check_up()?;
        Ok(self.crew.clone())
    }

    async fn technologies(&self) -> Result<Vec<Technology>, sqlx::Error> {
        self.check_up()?;
        Ok(self.technologies.clone())
    }
}

#[async_trait]
impl MissionControlStore for MemoryStore {
    async fn find_profile_id(&self, user_id: DbId) -> Result<DbId, sqlx::Error> {
        self.check_up()?;
        self.profiles
            .lock()
            .unwrap()
            .get(&user_id)
            .copied()
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn create_profile(&self, input: &CreateUserProfile) -> Result<DbId, sqlx::Error> {
        self.check_up()?;
        self.created_profiles.lock().unwrap().push(input.clone());
        let id = *self
            .profiles
            .lock()
            .unwrap()
            .entry(input.user_id)
            .or_insert_with(uuid::Uuid::new_v4);
        Ok(id)
    }

    async fn list_missions(&self, statuses: &[MissionStatus]) -> Result<Vec<Mission>, sqlx::Error> {
        self.check_up()?;
        Ok(self
            .missions
            .iter()
            .filter(|m| statuses.contains(&m.status))
            .cloned()
            .collect())
    }

    async fn list_achievements(
        &self,
        _profile_id: DbId,
    ) -> Result<Vec<JoinedAchievement>, sqlx::Error> {
        self.check_up()?;
        Ok(self.achievements.clone())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and a fast content policy.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        site_url: "http://localhost:5173".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://localhost/spacetour_test".to_string(),
        supabase_url: "http://identity.invalid".to_string(),
        supabase_anon_key: "anon".to_string(),
        content_fetch: RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_millis(5),
            timeout: Duration::from_millis(200),
        },
        content_precheck: true,
        cookie_secure: false,
        cookie_max_age_secs: 3600,
    }
}

/// Build the full application router over the given fakes.
pub fn build_test_app(store: Arc<MemoryStore>, identity: Arc<FakeIdentity>) -> Router {
    let config = test_config();
    let content = ContentService::new(
        store.clone(),
        config.content_fetch,
        config.content_precheck,
    );

    let state = AppState {
        config: Arc::new(config.clone()),
        content: Arc::new(content),
        store,
        identity,
    };

    build_app_router(state, &config)
}

/// Router with empty fakes.
pub fn default_app() -> Router {
    build_test_app(Arc::new(MemoryStore::default()), Arc::new(FakeIdentity::default()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// All `Set-Cookie` values of a response.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("response should redirect")
        .to_str()
        .unwrap()
}
