//! Backend Module
//!
//! This module contains all server-side code for Craneshell. It provides an
//! Axum HTTP server for account management, per-user config storage and the
//! public config gallery.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, tokens, auth guard, account flows
//! - **`configs`** - Owner-only config CRUD
//! - **`gallery`** - Public, read-only config browsing
//! - **`middleware`** - Request processing middleware
//! - **`database`** - SQLite pool and migrations
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── database.rs     - Connection pool and migrations
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── configs/        - Config storage
//! ├── gallery/        - Public gallery
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `TraceLayer` logs the request, CORS headers are applied
//! 2. Protected routes run the auth middleware, which resolves the bearer
//!    token to a user and attaches it to the request
//! 3. The handler runs its queries and returns JSON or a `BackendError`
//! 4. `BackendError` is turned into `{"error": ..., "status": ...}`

/// Authentication and user management
pub mod auth;

/// Config storage
pub mod configs;

/// SQLite connection pool and migrations
pub mod database;

/// Backend error types
pub mod error;

/// Public config gallery
pub mod gallery;

/// Request middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server initialization and state
pub mod server;

pub use error::{AuthError, BackendError};
pub use server::{create_app, AppState, ServerConfig};
