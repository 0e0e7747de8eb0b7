/**
 * User Model and Credential Store
 *
 * This module holds the user record, the `CredentialStore` seam used by the
 * auth guard and the account flows, and its SQLite implementation.
 *
 * Email and username uniqueness are enforced by the `users` table. A
 * uniqueness violation on insert is reported as `DuplicateEmail` or
 * `DuplicateUsername`, so two concurrent registrations for one email cannot
 * both succeed and neither crashes.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::backend::error::AuthError;

/// User struct representing a user in the database
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique, 3-50 alphanumeric chars)
    pub username: String,
    /// User email address (unique, lower-cased)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Persistence of user records
///
/// Implemented over SQLite for the server; tests substitute in-memory fakes.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look a user up by (normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Look a user up by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AuthError>;

    /// Insert a new user
    ///
    /// Fails with `DuplicateEmail` or `DuplicateUsername` when the record
    /// collides with an existing one.
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AuthError>;
}

/// Create a new user
///
/// # Arguments
/// * `executor` - Pool, connection or transaction
/// * `username` - User's chosen username
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user<'e>(
    executor: impl SqliteExecutor<'e>,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, username, email, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(executor)
    .await
}

/// Get user by email
pub async fn get_user_by_email<'e>(
    executor: impl SqliteExecutor<'e>,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

/// Get user by ID
pub async fn get_user_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Delete a user; owned configs are removed by the foreign key cascade
///
/// # Returns
/// Whether a user was deleted
pub async fn delete_user<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Classify an insert failure
fn insert_error(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return if db_err.message().contains("users.username") {
                AuthError::DuplicateUsername
            } else {
                AuthError::DuplicateEmail
            };
        }
    }
    AuthError::Store(err)
}

/// SQLite-backed credential store
#[derive(Debug, Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        get_user_by_email(&self.pool, email)
            .await
            .map_err(AuthError::Store)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AuthError> {
        get_user_by_id(&self.pool, id).await.map_err(AuthError::Store)
    }

    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AuthError> {
        create_user(&self.pool, username, email, password_hash)
            .await
            .map_err(insert_error)
    }
}
