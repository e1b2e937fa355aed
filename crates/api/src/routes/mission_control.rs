use axum::routing::get;
use axum::Router;

use crate::handlers::mission_control;
use crate::state::AppState;

/// Mission control routes.
///
/// ```text
/// GET /mission-control
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/mission-control", get(mission_control::get_dashboard))
}
