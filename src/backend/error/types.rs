/**
 * Backend Error Types
 *
 * This module defines the error types used by the backend server.
 *
 * # Error Types
 *
 * - `AuthError` - Failures of the authentication core (tokens, credentials,
 *   credential store)
 * - `BackendError` - Everything an HTTP handler can return; wraps
 *   `AuthError`, validation errors and database errors
 *
 * # Client-Facing Messages
 *
 * Every variant maps to a fixed message. Internal details (SQL errors,
 * bcrypt failures) are logged, never sent to the client, and login failures
 * never reveal whether the email exists.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Authentication errors
///
/// The first seven variants are terminal, client-caused failures. The
/// remaining ones wrap infrastructure failures and surface as 500.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization` header, or an empty one
    #[error("Not authenticated")]
    MissingCredentials,

    /// Bad scheme, bad signature, unparsable payload or missing subject
    #[error("Invalid token")]
    MalformedToken,

    /// Token is structurally valid but the current time is at or past `exp`
    #[error("Token expired")]
    ExpiredToken,

    /// Token subject does not resolve to a stored user
    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Username already taken")]
    DuplicateUsername,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Credential store failure
    #[error("credential store error: {0}")]
    Store(#[source] sqlx::Error),

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// HTTP status code for this error
    ///
    /// - Token and credential failures - 401 Unauthorized
    /// - Duplicate email or username - 400 Bad Request
    /// - Store, hashing and signing failures - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials
            | Self::MalformedToken
            | Self::ExpiredToken
            | Self::UserNotFound
            | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::DuplicateEmail | Self::DuplicateUsername => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Hashing(_) | Self::Signing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error hides an infrastructure failure
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Hashing(_) | Self::Signing(_))
    }
}

/// Backend-specific error types
///
/// Handlers return `Result<_, BackendError>`; the `IntoResponse`
/// implementation in `conversion` turns it into a JSON error body.
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use craneshell::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::CONFLICT, "Config name already exists");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
///
/// let err = BackendError::not_found("Config");
/// assert_eq!(err.message(), "Config not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Authentication or authorization failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request body or query failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Resource does not exist, or is not owned by the caller
    ///
    /// Both cases use this variant so a caller cannot probe for resources
    /// belonging to other users.
    #[error("{resource} not found")]
    NotFound {
        /// Resource kind, e.g. "Config"
        resource: &'static str,
    },

    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Database error outside the credential store
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Auth` - Depends on the auth error
    /// - `Validation` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `HandlerError` - Uses the status code from the error
    /// - `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => err.status_code(),
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::HandlerError { status, .. } => *status,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::Auth(err) if err.is_internal() => INTERNAL_MESSAGE.to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Validation(err) => err.to_string(),
            Self::NotFound { resource } => format!("{resource} not found"),
            Self::HandlerError { message, .. } => message.clone(),
            Self::Database(_) => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Whether the underlying cause must be logged rather than returned
    pub fn is_internal(&self) -> bool {
        match self {
            Self::Auth(err) => err.is_internal(),
            Self::Database(_) => true,
            _ => false,
        }
    }
}

const INTERNAL_MESSAGE: &str = "Internal server error";
