//! Mission control dashboard aggregation.
//!
//! Per request: redirect anonymous visitors, make sure the user has a
//! profile, then join the active missions and the profile's achievements.
//! Any failure after the profile step aborts the whole view.

use serde::Serialize;
use spacetour_core::achievement::Achievement;
use spacetour_core::mission::{active_missions, Countdown, Mission, ACTIVE_STATUSES};
use spacetour_core::profile::default_display_name;
use spacetour_core::session::SessionUser;
use spacetour_core::types::{DbId, Timestamp};
use spacetour_db::models::profile::CreateUserProfile;
use spacetour_db::MissionControlStore;

use crate::error::{AppError, AppResult};

/// Where anonymous visitors are sent.
pub const UNAUTHORIZED_REDIRECT: &str = "/?error=unauthorized";

#[derive(Debug, Clone, Serialize)]
pub struct MissionView {
    #[serde(flatten)]
    pub mission: Mission,
    pub countdown: Countdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementView {
    #[serde(flatten)]
    pub achievement: Achievement,
    pub is_earned: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissionControlView {
    pub profile_id: DbId,
    pub missions: Vec<MissionView>,
    pub achievements: Vec<AchievementView>,
}

#[derive(Debug, Clone)]
pub enum DashboardOutcome {
    Redirect(&'static str),
    Rendered(MissionControlView),
}

/// Build the dashboard for `user`, or a redirect when there is no user.
///
/// `now` anchors the mission countdowns.
pub async fn load_dashboard(
    store: &dyn MissionControlStore,
    user: Option<&SessionUser>,
    now: Timestamp,
) -> AppResult<DashboardOutcome> {
    let Some(user) = user else {
        tracing::debug!("No session, redirecting from mission control");
        return Ok(DashboardOutcome::Redirect(UNAUTHORIZED_REDIRECT));
    };

    let profile_id = ensure_profile(store, user).await?;

    let (missions, joined) = tokio::try_join!(
        store.list_missions(&ACTIVE_STATUSES),
        store.list_achievements(profile_id),
    )?;

    let missions = active_missions(missions)
        .into_iter()
        .map(|mission| MissionView {
            countdown: Countdown::until(mission.launch_date, now),
            mission,
        })
        .collect();

    let achievements = joined
        .into_iter()
        .map(|row| {
            Achievement::from_join(row.id, row.progress, row.earned_date, row.badges).map(
                |achievement| AchievementView {
                    is_earned: achievement.is_earned(),
                    achievement,
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DashboardOutcome::Rendered(MissionControlView {
        profile_id,
        missions,
        achievements,
    }))
}

/// Look up the user's profile, creating it when the lookup finds no row.
async fn ensure_profile(store: &dyn MissionControlStore, user: &SessionUser) -> AppResult<DbId> {
    match store.find_profile_id(user.id).await {
        Ok(id) => Ok(id),
        Err(sqlx::Error::RowNotFound) => {
            let input = CreateUserProfile {
                user_id: user.id,
                display_name: default_display_name(user.email.as_deref()),
            };
            store.create_profile(&input).await.map_err(|e| {
                AppError::InternalError(format!("Failed to create user profile: {e}"))
            })
        }
        Err(e) => Err(AppError::InternalError(format!(
            "Failed to look up user profile: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use spacetour_core::achievement::Badge;
    use spacetour_core::error::CoreError;
    use spacetour_core::mission::MissionStatus;
    use spacetour_db::models::achievement::JoinedAchievement;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        profile: Mutex<Option<DbId>>,
        created: Mutex<Vec<CreateUserProfile>>,
        missions: Vec<Mission>,
        achievements: Vec<JoinedAchievement>,
        lookup_fails: bool,
    }

    #[async_trait]
    impl MissionControlStore for MemoryStore {
        async fn find_profile_id(&self, _user_id: DbId) -> Result<DbId, sqlx::Error> {
            if self.lookup_fails {
                return Err(sqlx::Error::PoolTimedOut);
            }
            self.profile.lock().unwrap().ok_or(sqlx::Error::RowNotFound)
        }

        async fn create_profile(&self, input: &CreateUserProfile) -> Result<DbId, sqlx::Error> {
            let id = uuid::Uuid::new_v4();
            *self.profile.lock().unwrap() = Some(id);
            self.created.lock().unwrap().push(input.clone());
            Ok(id)
        }

        async fn list_missions(&self, _: &[MissionStatus]) -> Result<Vec<Mission>, sqlx::Error> {
            Ok(self.missions.clone())
        }

        async fn list_achievements(&self, _: DbId) -> Result<Vec<JoinedAchievement>, sqlx::Error> {
            Ok(self.achievements.clone())
        }
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
    }

    fn user(email: Option<&str>) -> SessionUser {
        SessionUser {
            id: uuid::Uuid::new_v4(),
            email: email.map(str::to_string),
        }
    }

    fn mission(name: &str, status: &str, days_out: i64) -> Mission {
        Mission {
            id: uuid::Uuid::new_v4(),
            name: name.to_string(),
            launch_date: now() + Duration::days(days_out),
            status: MissionStatus::from(status),
            description: String::new(),
            thumbnail_url: None,
        }
    }

    fn badge() -> Badge {
        Badge {
            name: "First Orbit".into(),
            description: "Complete an orbit".into(),
            image_url: "/badges/orbit.png".into(),
        }
    }

    fn rendered(outcome: DashboardOutcome) -> MissionControlView {
        match outcome {
            DashboardOutcome::Rendered(view) => view,
            other => panic!("expected rendered view, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn anonymous_visitor_is_redirected_without_lookup() {
        let store = MemoryStore {
            lookup_fails: true,
            ..Default::default()
        };
        let outcome = load_dashboard(&store, None, now()).await.unwrap();
        assert_matches!(outcome, DashboardOutcome::Redirect("/?error=unauthorized"));
    }

    #[tokio::test]
    async fn missing_profile_is_created_from_email() {
        let store = MemoryStore::default();
        rendered(load_dashboard(&store, Some(&user(Some("yuri@vostok.space"))), now()).await.unwrap());

        let created = store.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].display_name, "yuri");
    }

    #[tokio::test]
    async fn missing_email_uses_default_display_name() {
        let store = MemoryStore::default();
        rendered(load_dashboard(&store, Some(&user(None)), now()).await.unwrap());
        assert_eq!(store.created.lock().unwrap()[0].display_name, "Space Explorer");
    }

    #[tokio::test]
    async fn repeated_visits_reuse_the_created_profile() {
        let store = MemoryStore::default();
        let pilot = user(Some("pilot@example.com"));

        let first = rendered(load_dashboard(&store, Some(&pilot), now()).await.unwrap());
        let second = rendered(load_dashboard(&store, Some(&pilot), now()).await.unwrap());

        assert_eq!(first.profile_id, second.profile_id);
        assert_eq!(store.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn existing_profile_is_not_recreated() {
        let store = MemoryStore {
            profile: Mutex::new(Some(uuid::Uuid::new_v4())),
            ..Default::default()
        };
        rendered(load_dashboard(&store, Some(&user(None)), now()).await.unwrap());
        assert!(store.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_is_fatal() {
        let store = MemoryStore {
            lookup_fails: true,
            ..Default::default()
        };
        let result = load_dashboard(&store, Some(&user(None)), now()).await;
        assert_matches!(result, Err(AppError::InternalError(_)));
        assert!(store.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn only_active_missions_in_launch_order() {
        let store = MemoryStore {
            missions: vec![
                mission("Late", "UPCOMING", 30),
                mission("Finished", "DONE", 1),
                mission("Now", "IN_PROGRESS", 2),
                mission("Odd", "SCRUBBED", 3),
            ],
            ..Default::default()
        };
        let view = rendered(load_dashboard(&store, Some(&user(None)), now()).await.unwrap());

        let names: Vec<&str> = view.missions.iter().map(|m| m.mission.name.as_str()).collect();
        assert_eq!(names, vec!["Now", "Late"]);
        assert_eq!(view.missions[0].countdown.days, 2);
    }

    #[tokio::test]
    async fn achievements_carry_badge_and_earned_flag() {
        let store = MemoryStore {
            achievements: vec![
                JoinedAchievement {
                    id: uuid::Uuid::new_v4(),
                    progress: 100,
                    earned_date: Some(now()),
                    badges: vec![badge()],
                },
                JoinedAchievement {
                    id: uuid::Uuid::new_v4(),
                    progress: 40,
                    earned_date: None,
                    badges: vec![badge()],
                },
            ],
            ..Default::default()
        };
        let view = rendered(load_dashboard(&store, Some(&user(None)), now()).await.unwrap());

        assert_eq!(view.achievements.len(), 2);
        assert!(view.achievements[0].is_earned);
        assert!(!view.achievements[1].is_earned);
        assert_eq!(view.achievements[1].achievement.badge.name, "First Orbit");
    }

    #[tokio::test]
    async fn achievement_without_badge_aborts_the_view() {
        let store = MemoryStore {
            achievements: vec![JoinedAchievement {
                id: uuid::Uuid::new_v4(),
                progress: 10,
                earned_date: None,
                badges: vec![],
            }],
            ..Default::default()
        };
        let result = load_dashboard(&store, Some(&user(None)), now()).await;
        assert_matches!(result, Err(AppError::Core(CoreError::Integrity(_))));
    }
}
