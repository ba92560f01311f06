//! Database pool construction and migrations.

use std::path::Path;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use gudang_core::Config;

pub async fn setup_database(config: &Config) -> Result<PgPool, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .connect(&config.database_url)
        .await?;

    let migrator = Migrator::new(Path::new("migrations")).await?;
    migrator.run(&pool).await?;
    info!("Database migrations applied");

    Ok(pool)
}
