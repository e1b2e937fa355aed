//! Content table rows.

use spacetour_core::content::{CrewMember, Destination, ImagePair, Technology, TechnologyImages};
use spacetour_core::types::DbId;
use sqlx::FromRow;

/// A row from the `destinations` table.
#[derive(Debug, Clone, FromRow)]
pub struct DestinationRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub distance: String,
    pub travel: String,
    pub image_png: Option<String>,
    pub image_webp: Option<String>,
}

/// A row from the `crew_members` table.
#[derive(Debug, Clone, FromRow)]
pub struct CrewMemberRow {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_png: Option<String>,
    pub image_webp: Option<String>,
}

/// A row from the `technologies` table.
#[derive(Debug, Clone, FromRow)]
pub struct TechnologyRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_portrait: Option<String>,
    pub image_landscape: Option<String>,
    pub image_portrait_webp: Option<String>,
    pub image_landscape_webp: Option<String>,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Self {
            name: row.name,
            description: row.description,
            distance: row.distance,
            travel: row.travel,
            images: ImagePair {
                png: row.image_png.unwrap_or_default(),
                webp: row.image_webp.unwrap_or_default(),
            },
        }
    }
}

impl From<CrewMemberRow> for CrewMember {
    fn from(row: CrewMemberRow) -> Self {
        Self {
            name: row.name,
            role: row.role,
            bio: row.bio,
            images: ImagePair {
                png: row.image_png.unwrap_or_default(),
                webp: row.image_webp.unwrap_or_default(),
            },
        }
    }
}

impl From<TechnologyRow> for Technology {
    fn from(row: TechnologyRow) -> Self {
        Self {
            name: row.name,
            description: row.description,
            images: TechnologyImages {
                portrait: row.image_portrait.unwrap_or_default(),
                landscape: row.image_landscape.unwrap_or_default(),
                portrait_webp: row.image_portrait_webp.unwrap_or_default(),
                landscape_webp: row.image_landscape_webp.unwrap_or_default(),
            },
        }
    }
}
