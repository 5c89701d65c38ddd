//! Postgres access: the pool, embedded migrations and repositories

pub mod repositories;

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::{config::DatabaseConfig, constants::DATABASE_ACQUIRE_TIMEOUT_SECS};

/// Open the shared pool sized by `DATABASE_MAX_CONNECTIONS`
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(DATABASE_ACQUIRE_TIMEOUT_SECS))
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "Database pool ready");
    Ok(pool)
}

/// Apply pending schema migrations from `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Round-trip a trivial query; backs the `/healthcheck` database field
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
