use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content page routes.
///
/// ```text
/// GET /destinations
/// GET /crew
/// GET /technology
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/destinations", get(content::list_destinations))
        .route("/crew", get(content::list_crew))
        .route("/technology", get(content::list_technology))
}
