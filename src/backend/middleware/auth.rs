/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It resolves the `Authorization` header through the
 * auth guard and attaches the user to the request for handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::guard::{AuthContext, AuthGuard};
use crate::backend::auth::users::User;
use crate::backend::error::{AuthError, BackendError};

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the Authorization header
/// 2. Verifies the bearer token and loads its user
/// 3. Attaches an `AuthContext` to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the header is missing, the token is invalid
/// or expired, or the user no longer exists.
pub async fn auth_middleware(
    State(guard): State<AuthGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let header = match request.headers().get(AUTHORIZATION) {
        None => None,
        Some(value) => Some(value.to_str().map_err(|_| {
            tracing::warn!("Authorization header is not valid UTF-8");
            AuthError::MalformedToken
        })?),
    };

    let user = guard.authenticate(header).await.inspect_err(|e| {
        if !e.is_internal() {
            tracing::warn!("Rejected request to {}: {}", request.uri().path(), e);
        }
    })?;

    request.extensions_mut().insert(AuthContext { user });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Reads the `AuthContext` left by [`auth_middleware`]. Using it on a route
/// without the middleware rejects every request with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts.extensions.get::<AuthContext>().cloned().ok_or_else(|| {
            tracing::warn!("AuthContext not found in request extensions");
            AuthError::MissingCredentials
        })?;

        Ok(AuthUser(context.user))
    }
}
