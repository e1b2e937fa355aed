//! Handlers for the content pages (destinations, crew, technology).
//!
//! These never fail: the content service substitutes built-in data when the
//! database is unavailable.

use axum::extract::State;
use axum::Json;
use spacetour_core::content::{CrewMember, Destination, Technology};

use crate::response::DataResponse;
use crate::services::content::ContentPage;
use crate::state::AppState;

/// GET /api/v1/destinations
pub async fn list_destinations(
    State(state): State<AppState>,
) -> Json<DataResponse<ContentPage<Destination>>> {
    Json(DataResponse {
        data: state.content.destinations().await,
    })
}

/// GET /api/v1/crew
pub async fn list_crew(State(state): State<AppState>) -> Json<DataResponse<ContentPage<CrewMember>>> {
    Json(DataResponse {
        data: state.content.crew().await,
    })
}

/// GET /api/v1/technology
pub async fn list_technology(
    State(state): State<AppState>,
) -> Json<DataResponse<ContentPage<Technology>>> {
    Json(DataResponse {
        data: state.content.technologies().await,
    })
}
