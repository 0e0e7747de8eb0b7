/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown email and wrong password return the same 401 body
 * - User passwords are never returned in responses or logged
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::service::{AccountService, Credential};
use crate::backend::error::BackendError;
use crate::shared::validation::normalize_email;

/// Login handler
///
/// # Arguments
///
/// * `State(accounts)` - Account service
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// JSON response with bearer token and user info
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the store or token signing fails
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "bearer",
///   "expires_in": 86400,
///   "user": { "id": 1, "username": "alice", "email": "alice@example.com", "created_at": "..." }
/// }
/// ```
pub async fn login(
    State(accounts): State<AccountService>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let session = accounts
        .login(Credential {
            email: normalize_email(&request.email),
            password: request.password,
        })
        .await?;

    Ok(Json(TokenResponse::new(session.token, &session.user)))
}
