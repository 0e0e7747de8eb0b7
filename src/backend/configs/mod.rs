//! Configs Module
//!
//! This module stores terminal color schemes and serves them to their owners.
//!
//! - **`models`** - Stored row and JSON views
//! - **`db`** - SQLite queries
//! - **`handlers`** - Owner-only CRUD handlers under `/api/configs`

pub mod db;
pub mod handlers;
pub mod models;

pub use handlers::*;
pub use models::{Config, ConfigPublicResponse, ConfigResponse};
