//! PostgreSQL access for the Space Tourism backend.
//!
//! - [`models`] -- row structs and insert DTOs.
//! - [`repositories`] -- zero-sized query namespaces taking `&PgPool`.
//! - [`store`] -- the [`ContentStore`] / [`MissionControlStore`] seams the
//!   API is built against, implemented for Postgres by [`PgStore`].

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub use store::{ContentStore, MissionControlStore, PgStore};

pub type DbPool = sqlx::PgPool;

/// How long a request waits for a free connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
///
/// Connections are opened lazily so the server can start (and serve fallback
/// content) while the database is unreachable.
pub fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(database_url)
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
