/**
 * Password Hashing
 *
 * One-way salted password digests using bcrypt. Each call to `hash` draws a
 * fresh salt, so two digests of the same password differ, while `verify`
 * accepts any digest produced by `hash`.
 *
 * bcrypt only reads the first 72 bytes of its NUL-terminated input.
 * Passwords that do not fit are refused by `hash` and never match in
 * `verify`, so two passwords sharing a long prefix cannot stand in for each
 * other.
 *
 * bcrypt is deliberately slow. The async helpers run it on tokio's blocking
 * pool so a login burst does not stall the request executor.
 */

use crate::backend::error::AuthError;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;
/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// bcrypt password hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    ///
    /// The cost is validated when configuration is loaded; an out-of-range
    /// value makes `hash` fail.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Produce a salted digest of `plaintext`
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        bcrypt::non_truncating_hash(plaintext, self.cost)
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// Check `plaintext` against `digest`
    ///
    /// A malformed digest or an over-long plaintext is a mismatch, not an
    /// error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match bcrypt::non_truncating_verify(plaintext, digest) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Rejecting malformed password digest: {}", e);
                false
            }
        }
    }

    /// `hash` on the blocking thread pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, AuthError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }

    /// `verify` on the blocking thread pool
    pub async fn verify_blocking(&self, plaintext: String, digest: String) -> bool {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest))
            .await
            .unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
