//! Handler for the mission control dashboard.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use chrono::Utc;

use crate::auth::cookies;
use crate::error::AppResult;
use crate::middleware::auth::MaybeSession;
use crate::response::DataResponse;
use crate::services::mission_control::{load_dashboard, DashboardOutcome};
use crate::state::AppState;

/// GET /api/v1/mission-control
///
/// Anonymous visitors are redirected to `/?error=unauthorized`. A session
/// refreshed while resolving the request is written back as cookies.
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: MaybeSession,
) -> AppResult<Response> {
    let outcome = load_dashboard(state.store.as_ref(), session.user(), Utc::now()).await?;

    Ok(match outcome {
        DashboardOutcome::Redirect(to) => Redirect::to(to).into_response(),
        DashboardOutcome::Rendered(view) => (
            cookies::append(session.refreshed_cookies(&state)),
            Json(DataResponse { data: view }),
        )
            .into_response(),
    })
}
