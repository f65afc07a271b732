//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Catalog schema (`books`, `authors`, `categories`, `tags`).
///
/// The service itself only reads; `pustaka migrate` applies this to an
/// empty database before the external loader populates it.
pub static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let options = config.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        target_db = %config.describe(),
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
