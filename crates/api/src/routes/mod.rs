pub mod auth;
pub mod content;
pub mod health;
pub mod mission_control;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /destinations                 destination content (never empty)
/// /crew                         crew content (never empty)
/// /technology                   technology content (never empty)
/// /mission-control              dashboard (redirects when signed out)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(content::router())
        .merge(mission_control::router())
}
