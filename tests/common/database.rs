//! Database test fixtures and utilities
//!
//! Each fixture owns a fresh SQLite file in its own temporary directory, so
//! tests never share data and need no cleanup.

use sqlx::SqlitePool;
use tempfile::TempDir;

use craneshell::backend::database::{connect, run_migrations};

/// Test database fixture
///
/// The database file is removed when the fixture is dropped.
pub struct TestDatabase {
    pool: SqlitePool,
    _dir: TempDir,
}

impl TestDatabase {
    /// Create a migrated database in a new temporary directory
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("craneshell-test.db").display());

        let pool = connect(&url).await.expect("Failed to open test database");
        run_migrations(&pool).await.expect("Failed to run migrations");

        Self { pool, _dir: dir }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of rows in `table`
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
