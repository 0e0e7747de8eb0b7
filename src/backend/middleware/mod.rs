//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Authentication middleware for protecting routes, and the
//!   `AuthUser` extractor handlers use to read its result
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use craneshell::backend::auth::get_me;
//! use craneshell::backend::middleware::auth_middleware;
//! use craneshell::backend::server::state::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/api/auth/me", get(get_me))
//!         .route_layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser};
