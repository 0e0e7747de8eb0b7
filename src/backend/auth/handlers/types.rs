/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across register, login, and get_me handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::sessions::IssuedToken;
use crate::backend::auth::users::User;
use crate::shared::validation::{
    normalize_email, validate_email, validate_password, validate_username,
};
use crate::shared::SharedError;

/// Register request
///
/// Contains the username, email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username (3-50 alphanumeric chars)
    pub username: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

impl RegisterRequest {
    /// Check the request shape and return the normalized email
    pub fn validate(&self) -> Result<String, SharedError> {
        validate_username(&self.username)?;
        let email = normalize_email(&self.email);
        validate_email(&email)?;
        validate_password(&self.password)?;
        Ok(email)
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address (compared case-insensitively)
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Token response
///
/// Returned by register and login handlers. Contains the bearer token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT bearer token
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

impl TokenResponse {
    pub fn new(token: IssuedToken, user: &User) -> Self {
        Self {
            access_token: token.token,
            token_type: "bearer".to_string(),
            expires_in: token.expires_in,
            user: UserResponse::from(user),
        }
    }
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}
