//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use roster_core::DomainError;

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Longest password accepted at registration
pub const MAX_PASSWORD_LEN: usize = 128;

/// Password handling errors
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("{0}")]
    Weak(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

impl From<PasswordError> for DomainError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::Weak(msg) => Self::WeakPassword(msg),
            other => Self::IdentityError(other.to_string()),
        }
    }
}

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hashing(e.to_string()))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Validate password strength
///
/// Returns `Ok(())` if the password:
/// - has at least `MIN_PASSWORD_LEN` characters
/// - has at most `MAX_PASSWORD_LEN` characters
/// - is not only whitespace
///
/// # Errors
/// Returns `PasswordError::Weak` if the password doesn't meet requirements
pub fn validate_password_strength(password: &str) -> Result<(), PasswordError> {
    let len = password.chars().count();

    if len < MIN_PASSWORD_LEN {
        return Err(PasswordError::Weak(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    if len > MAX_PASSWORD_LEN {
        return Err(PasswordError::Weak(format!(
            "Password must be at most {MAX_PASSWORD_LEN} characters long"
        )));
    }

    if password.trim().is_empty() {
        return Err(PasswordError::Weak(
            "Password must not be blank".to_string(),
        ));
    }

    Ok(())
}
