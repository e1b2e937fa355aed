//! User achievements and the badges they unlock.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// An achievement joined to exactly one badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: DbId,
    /// Completion percentage, always within `0..=100`.
    pub progress: i16,
    pub earned_date: Option<Timestamp>,
    pub badge: Badge,
}

impl Achievement {
    /// Build an achievement from a join result that may have matched any
    /// number of badges.
    ///
    /// Exactly one badge is required; zero or several is reported as
    /// [`CoreError::Integrity`]. Progress outside `0..=100` is clamped.
    pub fn from_join(
        id: DbId,
        progress: i16,
        earned_date: Option<Timestamp>,
        mut badges: Vec<Badge>,
    ) -> Result<Self, CoreError> {
        if badges.len() != 1 {
            return Err(CoreError::Integrity(format!(
                "achievement {id} matched {} badges, expected exactly one",
                badges.len()
            )));
        }
        let badge = badges.remove(0);

        Ok(Self {
            id,
            progress: progress.clamp(0, 100),
            earned_date,
            badge,
        })
    }

    /// Any recorded earned date, past or future, counts as earned.
    pub fn is_earned(&self) -> bool {
        self.earned_date.is_some()
    }
}
