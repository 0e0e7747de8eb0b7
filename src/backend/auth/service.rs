/**
 * Account Flows
 *
 * Registration and login, composed from the credential store, the password
 * hasher and the token service. Request shape (username, email syntax,
 * password length) is validated by the handlers before these run.
 *
 * # Registration
 *
 * 1. Reject an email that is already registered (`DuplicateEmail`)
 * 2. Hash the password
 * 3. Insert the user; a concurrent registration that wins the race still
 *    surfaces as `DuplicateEmail` through the store's uniqueness check
 * 4. Issue a token
 *
 * # Login
 *
 * Unknown email and wrong password both fail with `InvalidCredentials`.
 */

use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{IssuedToken, TokenService};
use crate::backend::auth::users::{CredentialStore, User};
use crate::backend::error::AuthError;

/// Validated registration input
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    /// Normalized email
    pub email: String,
    pub password: String,
}

/// Login input
#[derive(Debug, Clone)]
pub struct Credential {
    /// Normalized email
    pub email: String,
    pub password: String,
}

/// Result of a successful register or login
#[derive(Debug, Clone)]
pub struct Session {
    pub token: IssuedToken,
    pub user: User,
}

/// Registration and login
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Create an account and return a session for it
    pub async fn register(&self, registration: Registration) -> Result<Session, AuthError> {
        if self.store.find_by_email(&registration.email).await?.is_some() {
            tracing::warn!("Registration failed: email already registered");
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash_blocking(registration.password).await?;

        let user = self
            .store
            .insert(&registration.username, &registration.email, &password_hash)
            .await?;

        let token = self.tokens.issue(user.id)?;

        tracing::info!("User created successfully: {} ({})", user.username, user.id);
        Ok(Session { token, user })
    }

    /// Check credentials and return a session
    pub async fn login(&self, credential: Credential) -> Result<Session, AuthError> {
        let Some(user) = self.store.find_by_email(&credential.email).await? else {
            tracing::warn!("Login failed: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        let valid = self
            .hasher
            .verify_blocking(credential.password, user.password_hash.clone())
            .await;
        if !valid {
            tracing::warn!("Login failed: wrong password for user {}", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id)?;

        tracing::info!("User logged in successfully: {} ({})", user.username, user.id);
        Ok(Session { token, user })
    }
}
