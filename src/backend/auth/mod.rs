//! Authentication Module
//!
//! This module handles user registration, login and request authentication.
//! It provides HTTP handlers for the authentication endpoints, the guard that
//! protects owned resources, and the building blocks they share.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and the credential store
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token issuing and verification
//! - **`guard`** - Bearer header resolution and ownership checks
//! - **`service`** - Registration and login flows
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential store
//! ├── password.rs     - Password hasher
//! ├── sessions.rs     - Token service
//! ├── guard.rs        - Auth guard and ownership
//! ├── service.rs      - Account flows
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Protected request**: `Authorization: Bearer <token>` → token verified →
//!    user loaded → handler runs with the user attached
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless JWTs and expire after the configured TTL
//! - Invalid credentials return 401 with one message for both failure causes
//! - Another user's resources are reported as not found

/// User data model and credential store
pub mod users;

/// Password hashing
pub mod password;

/// JWT token issuing and validation
pub mod sessions;

/// Request authentication and ownership
pub mod guard;

/// Registration and login flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use guard::{owned_by, AuthContext, AuthGuard, Owned};
pub use handlers::{get_me, login, register};
pub use password::PasswordHasher;
pub use service::AccountService;
pub use sessions::TokenService;
pub use users::{CredentialStore, SqliteCredentialStore, User};
