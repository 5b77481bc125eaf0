//! Passenger password hashing.
//!
//! Passwords are stored as Argon2id PHC strings with a per-password random salt.
//! Verification goes through the argon2 verifier, which compares in constant time.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::auth::AuthError;

/// Hashes a plaintext password into a PHC string.
///
/// # Returns
/// - `Ok(String)` - PHC-encoded hash including algorithm, parameters and salt
/// - `Err(AuthError::HashingFailed)` - Hasher rejected the input
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::HashingFailed(e.to_string()))
}

/// Checks a plaintext password against a stored PHC hash.
///
/// A stored value that does not parse as a PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::error!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
