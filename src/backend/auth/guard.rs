/**
 * Auth Guard
 *
 * Resolves the `Authorization` header of a request to a stored user, and
 * decides whether that user may see an owned resource.
 *
 * # Authentication Steps
 *
 * 1. Header absent or blank - `MissingCredentials`
 * 2. Not exactly `<scheme> <token>` with scheme "bearer" (any case) -
 *    `MalformedToken`
 * 3. Token Service verification - `ExpiredToken` / `MalformedToken`
 * 4. Subject not in the credential store - `UserNotFound`
 *
 * Nothing is cached between requests and nothing is written.
 *
 * # Ownership
 *
 * A resource owned by someone else is indistinguishable from a missing one:
 * [`owned_by`] turns both into `None`, and callers answer 404 for either.
 */

use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{CredentialStore, User};
use crate::backend::error::AuthError;

/// Identity resolved for the current request
///
/// Inserted into request extensions by the auth middleware and dropped with
/// the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
}

/// Resources that record the ID of the user who owns them
pub trait Owned {
    fn owner_id(&self) -> i64;
}

/// Keep `resource` only if `user` owns it
///
/// Missing and foreign resources both come back as `None`.
pub fn owned_by<T: Owned>(resource: Option<T>, user: &User) -> Option<T> {
    resource.filter(|r| r.owner_id() == user.id)
}

/// Extract the token from a raw `Authorization` header value
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = match header {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(AuthError::MissingCredentials),
    };

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedToken),
    }
}

/// Authenticates requests against the token service and credential store
#[derive(Clone)]
pub struct AuthGuard {
    tokens: Arc<TokenService>,
    store: Arc<dyn CredentialStore>,
}

impl AuthGuard {
    pub fn new(tokens: Arc<TokenService>, store: Arc<dyn CredentialStore>) -> Self {
        Self { tokens, store }
    }

    /// Resolve a raw `Authorization` header value to a user
    pub async fn authenticate(&self, header: Option<&str>) -> Result<User, AuthError> {
        let token = bearer_token(header)?;
        let user_id = self.tokens.verify(token)?;

        self.store.find_by_id(user_id).await?.ok_or_else(|| {
            tracing::warn!("Token subject {} does not exist", user_id);
            AuthError::UserNotFound
        })
    }
}
