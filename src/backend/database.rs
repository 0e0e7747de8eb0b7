/**
 * Database Connection
 *
 * Opens the SQLite connection pool and applies the migrations under
 * `migrations/`. Foreign keys are switched on for every connection so that
 * deleting a user removes the user's configs.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Connections kept by the server pool
const MAX_CONNECTIONS: u32 = 8;

/// Open a connection pool for `database_url`
///
/// The database file is created if it does not exist yet.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    tracing::info!("Connecting to database...");

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Apply pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Migrated in-memory database for unit tests
///
/// An in-memory SQLite database lives as long as its connection, so the pool
/// is pinned to a single connection.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid in-memory url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory database");
    run_migrations(&pool).await.expect("migrations");
    pool
}
