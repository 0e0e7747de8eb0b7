/**
 * Session Tokens
 *
 * This module issues and verifies the JWT bearer tokens that identify a user
 * on protected requests.
 *
 * # Token Format
 *
 * ```json
 * { "sub": "42", "exp": 1760659200, "iat": 1760572800 }
 * ```
 *
 * Tokens are stateless: any server sharing the signing secret can verify a
 * token without touching the database, and there is no revocation before
 * `exp`. A token becomes invalid once the current time reaches `exp` or the
 * secret changes.
 *
 * # Clock
 *
 * `issue` and `verify` read the system clock. `issue_at` and `verify_at`
 * take the current unix time explicitly.
 */

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::AuthError;

/// Longest token lifetime configuration accepts, in hours (ten years)
pub const MAX_TTL_HOURS: i64 = 24 * 365 * 10;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID, as a decimal string
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// A freshly issued token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Seconds until the token expires; always positive
    pub expires_in: i64,
}

/// Issues and verifies signed, time-limited bearer tokens
///
/// Built once at startup from configuration and shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret
    /// * `algorithm` - HMAC algorithm (HS256, HS384 or HS512)
    /// * `ttl_hours` - Token lifetime in hours, at most [`MAX_TTL_HOURS`]
    ///   once configuration is validated
    pub fn new(secret: &[u8], algorithm: Algorithm, ttl_hours: i64) -> Self {
        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl_seconds: ttl_hours.saturating_mul(60 * 60),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issue a token for `user_id`, expiring one TTL from now
    pub fn issue(&self, user_id: i64) -> Result<IssuedToken, AuthError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now`
    ///
    /// Fails with `Signing` when the expiry does not fit in a timestamp.
    pub fn issue_at(&self, user_id: i64, now: i64) -> Result<IssuedToken, AuthError> {
        let exp = now.checked_add(self.ttl_seconds).ok_or_else(|| {
            AuthError::Signing(ErrorKind::InvalidClaimFormat("exp".to_string()).into())
        })?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat: now,
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(AuthError::Signing)?;

        Ok(IssuedToken {
            token,
            expires_in: exp - now,
        })
    }

    /// Verify a token and return its subject
    ///
    /// # Errors
    /// * `ExpiredToken` - signature is valid but the token has expired
    /// * `MalformedToken` - anything else: bad signature, wrong algorithm,
    ///   unparsable payload, missing or non-numeric subject
    pub fn verify(&self, token: &str) -> Result<i64, AuthError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token as if the current time were `now`
    pub fn verify_at(&self, token: &str, now: i64) -> Result<i64, AuthError> {
        let claims = self.decode_claims(token)?;

        if now >= claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        claims.sub.parse::<i64>().map_err(|_| {
            tracing::warn!("Token subject is not a user id");
            AuthError::MalformedToken
        })
    }

    /// Check signature and shape, leaving expiry to the caller
    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is compared in `verify_at` with no leeway, so that an
        // expired but otherwise valid token is reported as expired.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Rejecting token: {}", e);
                AuthError::MalformedToken
            })
    }
}
