/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and apply migrations
 * 2. Build the token service, password hasher and credential store
 * 3. Wire them into the auth guard and account service
 * 4. Create and configure the router
 *
 * Unlike optional services, the database is required: a connection or
 * migration failure aborts startup.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::guard::AuthGuard;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::AccountService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{CredentialStore, SqliteCredentialStore};
use crate::backend::database;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to open database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Build application state over an open, migrated pool
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - Server configuration
pub fn build_state(pool: SqlitePool, config: &ServerConfig) -> AppState {
    let tokens = Arc::new(TokenService::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_algorithm,
        config.auth.token_ttl_hours,
    ));
    let store: Arc<dyn CredentialStore> = Arc::new(SqliteCredentialStore::new(pool.clone()));
    let hasher = PasswordHasher::new(config.auth.bcrypt_cost);

    AppState {
        db_pool: pool,
        guard: AuthGuard::new(tokens.clone(), store.clone()),
        accounts: AccountService::new(store, hasher, tokens),
        config: Arc::new(config.clone()),
    }
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing Craneshell backend server");

    let pool = database::connect(&config.database_url).await?;
    database::run_migrations(&pool).await?;

    let app_state = build_state(pool, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
