//! Password hashing with PBKDF2-SHA256.
//!
//! Hashes are stored as PHC strings (algorithm, parameters, salt, and digest
//! in one self-describing value), so parameters can evolve without a schema
//! change. Verification accepts any hash the `pbkdf2` crate can parse.

use std::fmt;

use pbkdf2::{
    Pbkdf2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Error raised when a password cannot be hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHashError(String);

impl fmt::Display for PasswordHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "password hashing failed: {}", self.0)
    }
}

impl std::error::Error for PasswordHashError {}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Pbkdf2
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| PasswordHashError(err.to_string()))
}

/// Check a plaintext password against a stored PHC hash.
///
/// A stored value that does not parse as a PHC string fails verification
/// rather than erroring; the account is simply not logged in.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Pbkdf2.verify_password(plain.as_bytes(), &parsed).is_ok()
}
