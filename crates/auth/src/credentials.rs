//! Password hashing with Argon2id.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use thiserror::Error;

/// Credential infrastructure failure.
///
/// A wrong password is **not** an error; `verify_password` reports that as
/// `Ok(false)`.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Hash a password with a fresh random salt, producing a PHC string
/// (e.g. `$argon2id$v=19$...`).
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CredentialError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a candidate password against a stored PHC hash string.
///
/// Returns `Ok(false)` on mismatch; errors only when the stored hash itself
/// cannot be parsed or verified structurally.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, CredentialError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| CredentialError::MalformedHash(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CredentialError::MalformedHash(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("pass123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("pass123", &hash).unwrap());
    }

    #[test]
    fn wrong_password_is_ok_false() {
        let hash = hash_password("pass123").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let a = hash_password("securepass").unwrap();
        let b = hash_password("securepass").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let err = verify_password("pass123", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, CredentialError::MalformedHash(_)));
    }
}
