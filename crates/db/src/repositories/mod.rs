//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod achievement_repo;
pub mod content_repo;
pub mod mission_repo;
pub mod profile_repo;

pub use achievement_repo::AchievementRepo;
pub use content_repo::ContentRepo;
pub use mission_repo::MissionRepo;
pub use profile_repo::ProfileRepo;
