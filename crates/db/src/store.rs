//! Store traits the API is written against.
//!
//! Handlers and services hold these as trait objects inside the application
//! state, so tests can substitute in-memory implementations. Errors stay
//! `sqlx::Error` so "no rows" keeps its precise meaning
//! (`sqlx::Error::RowNotFound`) across the seam.

use async_trait::async_trait;
use spacetour_core::content::{CrewMember, Destination, Technology};
use spacetour_core::mission::{Mission, MissionStatus};
use spacetour_core::types::DbId;

use crate::models::achievement::JoinedAchievement;
use crate::models::profile::CreateUserProfile;
use crate::repositories::{AchievementRepo, ContentRepo, MissionRepo, ProfileRepo};
use crate::DbPool;

/// Fetch-all access to the content tables.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    async fn destinations(&self) -> Result<Vec<Destination>, sqlx::Error>;

    async fn crew(&self) -> Result<Vec<CrewMember>, sqlx::Error>;

    async fn technologies(&self) -> Result<Vec<Technology>, sqlx::Error>;
}

/// Profile, mission and achievement access for the dashboard.
#[async_trait]
pub trait MissionControlStore: Send + Sync {
    /// Profile id for an identity-provider user; `RowNotFound` if absent.
    async fn find_profile_id(&self, user_id: DbId) -> Result<DbId, sqlx::Error>;

    /// Create (or return the existing) profile, yielding its id.
    async fn create_profile(&self, input: &CreateUserProfile) -> Result<DbId, sqlx::Error>;

    /// Missions with one of `statuses`, earliest launch first.
    async fn list_missions(&self, statuses: &[MissionStatus]) -> Result<Vec<Mission>, sqlx::Error>;

    async fn list_achievements(
        &self,
        profile_id: DbId,
    ) -> Result<Vec<JoinedAchievement>, sqlx::Error>;
}

/// PostgreSQL-backed implementation of both store traits.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    async fn destinations(&self) -> Result<Vec<Destination>, sqlx::Error> {
        let rows = ContentRepo::list_destinations(&self.pool).await?;
        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn crew(&self) -> Result<Vec<CrewMember>, sqlx::Error> {
        let rows = ContentRepo::list_crew(&self.pool).await?;
        Ok(rows.into_iter().map(CrewMember::from).collect())
    }

    async fn technologies(&self) -> Result<Vec<Technology>, sqlx::Error> {
        let rows = ContentRepo::list_technologies(&self.pool).await?;
        Ok(rows.into_iter().map(Technology::from).collect())
    }
}

#[async_trait]
impl MissionControlStore for PgStore {
    async fn find_profile_id(&self, user_id: DbId) -> Result<DbId, sqlx::Error> {
        ProfileRepo::find_id_by_user(&self.pool, user_id).await
    }

    async fn create_profile(&self, input: &CreateUserProfile) -> Result<DbId, sqlx::Error> {
        let profile = ProfileRepo::create(&self.pool, input).await?;
        tracing::info!(profile_id = %profile.id, user_id = %profile.user_id, "Created user profile");
        Ok(profile.id)
    }

    async fn list_missions(&self, statuses: &[MissionStatus]) -> Result<Vec<Mission>, sqlx::Error> {
        let statuses: Vec<String> = statuses.iter().map(|s| s.as_str().to_string()).collect();
        let rows = MissionRepo::list_by_status(&self.pool, &statuses).await?;
        Ok(rows.into_iter().map(Mission::from).collect())
    }

    async fn list_achievements(
        &self,
        profile_id: DbId,
    ) -> Result<Vec<JoinedAchievement>, sqlx::Error> {
        AchievementRepo::list_for_profile(&self.pool, profile_id).await
    }
}
