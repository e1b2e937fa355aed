//! Read-only site content: destinations, crew members and technologies.

use serde::{Deserialize, Serialize};

/// A primary image plus its alternate-format counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePair {
    pub png: String,
    pub webp: String,
}

/// Technology images come in portrait and landscape crops, each in two formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyImages {
    pub portrait: String,
    pub landscape: String,
    pub portrait_webp: String,
    pub landscape_webp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub description: String,
    /// Average distance from Earth, display formatted (e.g. `"384,400 km"`).
    pub distance: String,
    /// Estimated travel time, display formatted (e.g. `"3 days"`).
    pub travel: String,
    pub images: ImagePair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub images: ImagePair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub description: String,
    pub images: TechnologyImages,
}

/// The three content collections served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Destinations,
    Crew,
    Technology,
}

/// Title and description shown for a content page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

impl ContentCategory {
    /// Backing table name.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Destinations => "destinations",
            Self::Crew => "crew_members",
            Self::Technology => "technologies",
        }
    }

    pub fn meta(self) -> PageMeta {
        match self {
            Self::Destinations => PageMeta {
                title: "Space Tourism - Destination",
                description: "Choose your destination in space",
            },
            Self::Crew => PageMeta {
                title: "Space Tourism - Crew",
                description: "Meet your space crew",
            },
            Self::Technology => PageMeta {
                title: "Space Tourism - Technology",
                description: "Learn about space technology",
            },
        }
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}
