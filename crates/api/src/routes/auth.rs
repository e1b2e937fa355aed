use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, callback, sync};
use crate::state::AppState;

/// Mount the `/auth` routes (root level, NOT under `/api/v1`).
///
/// ```text
/// POST /auth/login              email + password sign-in
/// POST /auth/signup             register, optionally signed in
/// POST /auth/logout             revoke and clear cookies
/// POST /auth/reset-password     send reset email
/// POST /auth/sync               mirror a client auth transition
/// GET  /auth/callback           exchange an emailed/OAuth code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/reset-password", post(auth::reset_password))
        .route("/auth/sync", post(sync::sync))
        .route("/auth/callback", get(callback::callback))
}
