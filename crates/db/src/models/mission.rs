//! Mission rows.

use spacetour_core::mission::{Mission, MissionStatus};
use spacetour_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `missions` table.
#[derive(Debug, Clone, FromRow)]
pub struct MissionRow {
    pub id: DbId,
    pub name: String,
    pub launch_date: Timestamp,
    pub status: String,
    pub basic_descrip: String,
    pub thumbnail_url: Option<String>,
}

impl From<MissionRow> for Mission {
    fn from(row: MissionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            launch_date: row.launch_date,
            status: MissionStatus::from(row.status),
            description: row.basic_descrip,
            thumbnail_url: row.thumbnail_url,
        }
    }
}
