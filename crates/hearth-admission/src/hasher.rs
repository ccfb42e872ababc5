//! Credential hashing capability.
//!
//! Injected into the engine as a trait object so tests can substitute a
//! deterministic fake and skip the Argon2 cost.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{message}")]
pub struct HasherError {
    pub message: String,
}

/// One-way credential transform. `hash` produces an opaque digest;
/// `verify` checks a clear password against one.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, HasherError>;
    fn verify(&self, password: &str, digest: &str) -> bool;
}

/// Argon2id with library defaults; digests are PHC strings with a
/// per-hash random salt.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, HasherError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HasherError {
                message: e.to_string(),
            })
    }

    fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
