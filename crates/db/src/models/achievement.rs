//! Achievement rows joined to their badges.

use spacetour_core::achievement::Badge;
use spacetour_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One row of the `user_achievements LEFT JOIN badges` query.
///
/// Badge columns are `NULL` when the join matched nothing.
#[derive(Debug, Clone, FromRow)]
pub struct AchievementBadgeRow {
    pub id: DbId,
    pub progress: i16,
    pub earned_date: Option<Timestamp>,
    pub badge_name: Option<String>,
    pub badge_description: Option<String>,
    pub badge_image_url: Option<String>,
}

/// An achievement with every badge its join produced.
///
/// The cardinality of `badges` is not checked here; see
/// `spacetour_core::achievement::Achievement::from_join`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedAchievement {
    pub id: DbId,
    pub progress: i16,
    pub earned_date: Option<Timestamp>,
    pub badges: Vec<Badge>,
}

/// Collapse join rows into one [`JoinedAchievement`] per achievement id.
///
/// Rows for the same achievement must be adjacent (the query orders by id
/// within creation time). Output keeps first-seen order.
pub fn group_rows(rows: Vec<AchievementBadgeRow>) -> Vec<JoinedAchievement> {
    let mut grouped: Vec<JoinedAchievement> = Vec::new();

    for row in rows {
        let badge = match (row.badge_name, row.badge_description, row.badge_image_url) {
            (Some(name), description, image_url) => Some(Badge {
                name,
                description: description.unwrap_or_default(),
                image_url: image_url.unwrap_or_default(),
            }),
            _ => None,
        };

        match grouped.last_mut() {
            Some(last) if last.id == row.id => last.badges.extend(badge),
            _ => grouped.push(JoinedAchievement {
                id: row.id,
                progress: row.progress,
                earned_date: row.earned_date,
                badges: badge.into_iter().collect(),
            }),
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: DbId, badge: Option<&str>) -> AchievementBadgeRow {
        AchievementBadgeRow {
            id,
            progress: 40,
            earned_date: None,
            badge_name: badge.map(str::to_string),
            badge_description: badge.map(|b| format!("{b} desc")),
            badge_image_url: badge.map(|b| format!("/{b}.png")),
        }
    }

    #[test]
    fn one_row_per_achievement_yields_one_badge_each() {
        let a = DbId::new_v4();
        let b = DbId::new_v4();
        let grouped = group_rows(vec![row(a, Some("orbit")), row(b, Some("moon"))]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].id, a);
        assert_eq!(grouped[0].badges[0].name, "orbit");
        assert_eq!(grouped[1].badges[0].image_url, "/moon.png");
    }

    #[test]
    fn unmatched_join_yields_no_badges() {
        let grouped = group_rows(vec![row(DbId::new_v4(), None)]);
        assert_eq!(grouped.len(), 1);
        assert!(grouped[0].badges.is_empty());
    }

    #[test]
    fn duplicate_join_rows_collect_multiple_badges() {
        let a = DbId::new_v4();
        let grouped = group_rows(vec![row(a, Some("x")), row(a, Some("y"))]);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].badges.len(), 2);
    }
}
