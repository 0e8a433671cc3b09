//! # Credential Storage
//!
//! Argon2id-backed password storage. The contract is deliberately small:
//! derive a verifier once at sign-up, answer yes/no forever after. What is
//! stored is a salted PHC-format hash; nothing reversible ever touches a
//! `User`.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{BlogError, Result};

/// A stored password verifier in PHC string format.
#[derive(Clone)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Derives a verifier from a plaintext password with a fresh random salt.
    pub fn derive(password: &str) -> Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| BlogError::Credential(e.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// True iff `candidate` is the password this verifier was derived from.
    /// A malformed stored hash verifies as `false` rather than erroring.
    pub fn matches(&self, candidate: &str) -> bool {
        let parsed = match PasswordHash::new(&self.0) {
            Ok(p) => p,
            Err(_) => return false,
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Keeps the hash out of logs and debug dumps.
impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_and_match() {
        let credential = CredentialHash::derive("sixrings").unwrap();
        assert!(credential.matches("sixrings"));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let credential = CredentialHash::derive("sixrings").unwrap();
        assert!(!credential.matches("sevenrings"));
        assert!(!credential.matches(""));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let a = CredentialHash::derive("abc123").unwrap();
        let b = CredentialHash::derive("abc123").unwrap();
        assert_ne!(a.0, b.0);
    }

    #[test]
    fn malformed_stored_hash_matches_nothing() {
        let credential = CredentialHash("not-a-phc-string".to_string());
        assert!(!credential.matches("anything"));
    }

    #[test]
    fn debug_form_is_redacted() {
        let credential = CredentialHash::derive("abc123").unwrap();
        assert_eq!(format!("{credential:?}"), "CredentialHash(..)");
    }
}
