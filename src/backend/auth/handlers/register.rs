/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Normalize the email (trimmed, lower-cased)
 * 3. Create the account through the account service
 * 4. Return token and user info
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::service::{AccountService, Registration};
use crate::backend::error::BackendError;

/// Register handler
///
/// # Arguments
///
/// * `State(accounts)` - Account service
/// * `Json(request)` - Username, email and password
///
/// # Errors
///
/// * `400 Bad Request` - Invalid input, or email/username already taken
/// * `500 Internal Server Error` - Store or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "password123"
/// }
/// ```
pub async fn register(
    State(accounts): State<AccountService>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let email = request.validate().inspect_err(|e| {
        tracing::warn!("Rejected registration: {}", e);
    })?;
    tracing::info!("Registration request for: {}", request.username);

    let session = accounts
        .register(Registration {
            username: request.username,
            email,
            password: request.password,
        })
        .await?;

    Ok(Json(TokenResponse::new(session.token, &session.user)))
}
