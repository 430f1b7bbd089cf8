//! Database connection pool using the OnceCell pattern.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tokio::sync::OnceCell;

use crate::settings::Settings;

static POOL: OnceCell<MySqlPool> = OnceCell::const_new();

/// Settings or pool construction failure.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to load database settings: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("failed to build connection pool: {0}")]
    Database(#[from] sqlx::Error),
}

/// Get or initialize the database connection pool.
/// Configured from [`Settings`], honoring `.env` and `DATABASE_*` overrides.
pub async fn get_pool() -> Result<&'static MySqlPool, PoolError> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let settings = Settings::new()?;
        open_pool(&settings)
    })
    .await
}

/// Build a pool from explicit settings.
///
/// Connections are opened lazily on first use; beyond the configured ceiling
/// callers queue for a free connection.
pub fn open_pool(settings: &Settings) -> Result<MySqlPool, PoolError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(settings.database.connections)
        .connect_lazy(&settings.database.url())?;
    Ok(pool)
}
