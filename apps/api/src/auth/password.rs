//! Argon2id password hashing in PHC string format.
//!
//! The salt is generated per hash via `OsRng`; algorithm parameters travel
//! inside the PHC string, so verification needs no extra configuration.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashes a plaintext password, returning the PHC-formatted string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash.
/// `Ok(false)` means the password simply did not match.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trips() {
        let hash = hash_password("a-perfectly-fine-password").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("a-perfectly-fine-password", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_ok_false() {
        let hash = hash_password("a-perfectly-fine-password").unwrap();
        assert!(!verify_password("not-that-password", &hash).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
