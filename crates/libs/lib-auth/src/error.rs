//! # Auth Errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The HMAC primitive refused the key material.
    #[error("Invalid HMAC key: {0}")]
    HmacKey(String),

    /// The token could not be signed or serialized.
    #[error("Failed to encode JWT: {0}")]
    TokenEncode(#[from] jsonwebtoken::errors::Error),
}
