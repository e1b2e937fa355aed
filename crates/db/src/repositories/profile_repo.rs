//! Repository for the `user_profiles` table.

use spacetour_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateUserProfile, UserProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, display_name, created_at, updated_at";

pub struct ProfileRepo;

impl ProfileRepo {
    /// Look up the profile id for an identity-provider user.
    ///
    /// Returns `sqlx::Error::RowNotFound` when the user has no profile yet.
    pub async fn find_id_by_user(pool: &PgPool, user_id: DbId) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as("SELECT id FROM user_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(id)
    }

    /// Insert a profile, returning the stored row.
    ///
    /// Idempotent on `user_id`: if a concurrent request created the profile
    /// first, that row is returned and its display name is left untouched.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUserProfile,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (user_id, display_name)
             VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(input.user_id)
            .bind(&input.display_name)
            .fetch_one(pool)
            .await
    }
}
