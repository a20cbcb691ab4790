//! # Password Hashing
//!
//! Salted password hashing with HMAC-SHA512.
//!
//! The salt is a random 128-byte HMAC key (one SHA-512 block) drawn per
//! registration, and the stored hash is `HMAC-SHA512(salt, utf8(password))`.

use crate::error::{Error, Result};
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use sha2::Sha512;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

/// Salt length in bytes (SHA-512 block size).
pub const SALT_LEN: usize = 128;

/// Output of [`hash_password`]: the keyed hash and the salt used as the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    pub hash: Vec<u8>,
    pub salt: Vec<u8>,
}

/// Hash a password under a freshly generated random salt.
pub fn hash_password(password: &str) -> Result<PasswordDigest> {
    let mut salt = vec![0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let hash = hash_password_with_salt(password, &salt)?;

    Ok(PasswordDigest { hash, salt })
}

/// Compute `HMAC-SHA512(salt, password)`.
pub fn hash_password_with_salt(password: &str, salt: &[u8]) -> Result<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(salt).map_err(|e| Error::HmacKey(e.to_string()))?;
    mac.update(password.as_bytes());

    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify a plaintext password against a stored hash and salt.
///
/// The full byte sequences are compared in constant time. A stored hash of a
/// different length never matches.
pub fn verify_password(password: &str, hash: &[u8], salt: &[u8]) -> Result<bool> {
    let computed = hash_password_with_salt(password, salt)?;

    Ok(computed.as_slice().ct_eq(hash).into())
}
