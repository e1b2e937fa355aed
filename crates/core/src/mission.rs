//! Missions shown on the mission control dashboard.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{DbId, Timestamp};

/// Mission lifecycle status as stored in `missions.status`.
///
/// Values other than the well-known ones are kept verbatim in
/// [`MissionStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MissionStatus {
    InProgress,
    Upcoming,
    Done,
    Other(String),
}

/// Statuses that make a mission visible on the dashboard.
pub const ACTIVE_STATUSES: [MissionStatus; 2] = [MissionStatus::InProgress, MissionStatus::Upcoming];

impl MissionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Upcoming => "UPCOMING",
            Self::Done => "DONE",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::InProgress | Self::Upcoming)
    }
}

impl From<&str> for MissionStatus {
    fn from(value: &str) -> Self {
        match value {
            "IN_PROGRESS" => Self::InProgress,
            "UPCOMING" => Self::Upcoming,
            "DONE" => Self::Done,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for MissionStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl Serialize for MissionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MissionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: DbId,
    pub name: String,
    pub launch_date: Timestamp,
    pub status: MissionStatus,
    pub description: String,
    pub thumbnail_url: Option<String>,
}

/// Keep only active missions, ordered by launch date ascending.
///
/// The sort is stable so missions sharing a launch date keep their input order.
pub fn active_missions(missions: Vec<Mission>) -> Vec<Mission> {
    let mut active: Vec<Mission> = missions
        .into_iter()
        .filter(|m| m.status.is_active())
        .collect();
    active.sort_by_key(|m| m.launch_date);
    active
}

/// Time remaining until launch, broken into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Countdown from `now` to `launch`. Launches in the past yield all zeros.
    pub fn until(launch: Timestamp, now: Timestamp) -> Self {
        let remaining = (launch - now).num_seconds();
        if remaining <= 0 {
            return Self::default();
        }
        Self {
            days: remaining / 86_400,
            hours: (remaining / 3_600) % 24,
            minutes: (remaining / 60) % 60,
            seconds: remaining % 60,
        }
    }
}
