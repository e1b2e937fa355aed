//! User profile model and DTOs.

use serde::Serialize;
use spacetour_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    /// Identity-provider user id. Unique per profile.
    pub user_id: DbId,
    pub display_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile.
#[derive(Debug, Clone)]
pub struct CreateUserProfile {
    pub user_id: DbId,
    pub display_name: String,
}
