use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPoolOptions};
use sqlx::Connection;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::MySqlPool;

/// Pool sizing and acquire behaviour.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a connection pool that connects on first use.
///
/// Construction only fails on a malformed URL; an unreachable server
/// surfaces later, when a connection is acquired.
pub fn create_pool(database_url: &str, settings: &PoolSettings) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy(database_url)
}

/// Open a single dedicated connection, outside any pool.
///
/// Makes exactly one attempt, so a failure carries the driver's own error.
pub async fn connect(options: &MySqlConnectOptions) -> Result<MySqlConnection, sqlx::Error> {
    let conn = MySqlConnection::connect_with(options).await?;
    tracing::debug!("Opened dedicated database connection");
    Ok(conn)
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
