//! Repository for `user_achievements` joined to `badges`.

use spacetour_core::types::DbId;
use sqlx::PgPool;

use crate::models::achievement::{group_rows, AchievementBadgeRow, JoinedAchievement};

pub struct AchievementRepo;

impl AchievementRepo {
    /// All achievements for a profile with the badges each one joins to.
    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<JoinedAchievement>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AchievementBadgeRow>(
            "SELECT ua.id, ua.progress, ua.earned_date,
                    b.name AS badge_name,
                    b.description AS badge_description,
                    b.image_url AS badge_image_url
             FROM user_achievements ua
             LEFT JOIN badges b ON b.id = ua.badge_id
             WHERE ua.profile_id = $1
             ORDER BY ua.created_at ASC, ua.id ASC",
        )
        .bind(profile_id)
        .fetch_all(pool)
        .await?;

        Ok(group_rows(rows))
    }
}
