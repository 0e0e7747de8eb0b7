//! Craneshell - Main Library
//!
//! Craneshell stores terminal color schemes ("configs") for registered users
//! and exposes a public, read-only gallery of every saved scheme.
//!
//! # Overview
//!
//! This library provides:
//! - Account registration and login with bcrypt-hashed passwords
//! - Stateless JWT bearer tokens for authenticated requests
//! - Per-user CRUD over configs with ownership enforcement
//! - Public listing and search of configs
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and validation shared with API clients
//!   - Palette and config payload types with their defaults
//!   - Input validation for usernames, emails, passwords and colors
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routing and application state
//!   - Authentication: password hashing, tokens, auth guard
//!   - Config persistence (SQLite through sqlx)
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (enabled by default)
//!   - Includes Axum server, database, bcrypt and JWT support
//!
//! # Usage
//!
//! ```rust,no_run
//! use craneshell::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::error::AuthError` for authentication failures
//! - `backend::error::BackendError` for everything a handler can return

/// Shared types and validation
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
