/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The auth guard used by the auth middleware
 * - The account service used by register and login
 * - The immutable server configuration
 *
 * Everything in it is cheap to clone: the pool is reference counted and the
 * services hold their collaborators behind `Arc`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // Query the database
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::guard::AuthGuard;
use crate::backend::auth::service::AccountService;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every request
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Resolves bearer tokens to users for protected routes
    pub guard: AuthGuard,

    /// Registration and login
    pub accounts: AccountService,

    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AuthGuard {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.guard.clone()
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
