//! Shared Module
//!
//! This module contains types that are shared between the backend and API
//! clients. They describe the JSON bodies exchanged over the REST API and the
//! validation rules applied to them, and carry no server dependencies.

/// Palette and config payload types
pub mod palette;

/// Input validation rules
pub mod validation;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use palette::{ConfigPayload, Palette, SpecialColors};
