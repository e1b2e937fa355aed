//! Repository for the `missions` table.

use sqlx::PgPool;

use crate::models::mission::MissionRow;

pub struct MissionRepo;

impl MissionRepo {
    /// Missions whose status is one of `statuses`, earliest launch first.
    pub async fn list_by_status(
        pool: &PgPool,
        statuses: &[String],
    ) -> Result<Vec<MissionRow>, sqlx::Error> {
        sqlx::query_as::<_, MissionRow>(
            "SELECT id, name, launch_date, status, basic_descrip, thumbnail_url
             FROM missions
             WHERE status = ANY($1)
             ORDER BY launch_date ASC",
        )
        .bind(statuses)
        .fetch_all(pool)
        .await
    }
}
