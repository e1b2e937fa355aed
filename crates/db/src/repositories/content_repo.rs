//! Repository for the read-only content tables.

use sqlx::PgPool;

use crate::models::content::{CrewMemberRow, DestinationRow, TechnologyRow};

/// Fetch-all queries for `destinations`, `crew_members` and `technologies`.
///
/// No ordering is imposed; rows come back in backend order.
pub struct ContentRepo;

impl ContentRepo {
    pub async fn list_destinations(pool: &PgPool) -> Result<Vec<DestinationRow>, sqlx::Error> {
        sqlx::query_as::<_, DestinationRow>(
            "SELECT id, name, description, distance, travel, image_png, image_webp
             FROM destinations",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_crew(pool: &PgPool) -> Result<Vec<CrewMemberRow>, sqlx::Error> {
        sqlx::query_as::<_, CrewMemberRow>(
            "SELECT id, name, role, bio, image_png, image_webp FROM crew_members",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_technologies(pool: &PgPool) -> Result<Vec<TechnologyRow>, sqlx::Error> {
        sqlx::query_as::<_, TechnologyRow>(
            "SELECT id, name, description, image_portrait, image_landscape,
                    image_portrait_webp, image_landscape_webp
             FROM technologies",
        )
        .fetch_all(pool)
        .await
    }
}
