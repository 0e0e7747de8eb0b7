//! Gallery Module
//!
//! Read-only, unauthenticated browsing of every user's configs under
//! `/api/public`. Responses use the public view, which carries no owner.

pub mod handlers;

pub use handlers::*;
