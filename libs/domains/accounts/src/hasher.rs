//! Password digest strategies.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sha2::{Digest, Sha256};

use crate::error::{AccountError, AccountResult};

/// Turns a plaintext password into the digest kept in the store.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> AccountResult<String>;

    fn verify(&self, plaintext: &str, digest: &str) -> AccountResult<bool>;
}

/// Salted Argon2id digests in PHC string format.
///
/// Uses the crate's default Argon2id parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> AccountResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AccountError::PasswordHash(e.to_string()))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> AccountResult<bool> {
        let parsed_hash =
            PasswordHash::new(digest).map_err(|e| AccountError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Unsalted SHA-256 hex digest.
///
/// Deterministic and fast, which also makes it unsuitable for real credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl CredentialHasher for Sha256Hasher {
    fn hash(&self, plaintext: &str) -> AccountResult<String> {
        Ok(const_hex::encode(Sha256::digest(plaintext.as_bytes())))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> AccountResult<bool> {
        Ok(self.hash(plaintext)?.eq_ignore_ascii_case(digest))
    }
}
