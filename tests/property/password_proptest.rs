//! Property-based tests for password hashing
//!
//! bcrypt is slow even at the lowest cost, so these run few cases.

use craneshell::backend::auth::password::{PasswordHasher, MIN_COST};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_hash_verifies_own_password(password in "[ -~]{1,71}") {
        let hasher = PasswordHasher::new(MIN_COST);
        let digest = hasher.hash(&password).unwrap();

        prop_assert!(digest.starts_with("$2"));
        prop_assert!(hasher.verify(&password, &digest));
    }

    #[test]
    fn test_hash_rejects_other_password(password in "[a-z]{8,32}", suffix in "[0-9]{1,4}") {
        let hasher = PasswordHasher::new(MIN_COST);
        let digest = hasher.hash(&password).unwrap();
        let other = format!("{password}{suffix}");

        prop_assert!(!hasher.verify(&other, &digest));
    }

    #[test]
    fn test_shared_long_prefix_does_not_verify(
        prefix in "[a-z]{64,80}",
        first in "[0-9]{1,8}",
        second in "[A-Z]{1,8}",
    ) {
        let hasher = PasswordHasher::new(MIN_COST);
        let owner = format!("{prefix}{first}");
        let guess = format!("{prefix}{second}");

        match hasher.hash(&owner) {
            Ok(digest) => {
                prop_assert!(owner.len() <= 71);
                prop_assert!(!hasher.verify(&guess, &digest));
            }
            Err(_) => prop_assert!(owner.len() > 71),
        }
    }
}
