use std::sync::Arc;

use spacetour_db::MissionControlStore;

use crate::auth::cookies::CookieSettings;
use crate::auth::identity::IdentityProvider;
use crate::config::ServerConfig;
use crate::services::content::ContentService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Content reads with retry and fallback.
    pub content: Arc<ContentService>,
    /// Profile, mission and achievement access.
    pub store: Arc<dyn MissionControlStore>,
    /// Hosted auth service client.
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings::from(self.config.as_ref())
    }
}
