//! # Authentication Library
//!
//! Keyed password hashing and JWT issuance.

pub mod error;
pub mod pwd;
pub mod token;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pwd::{hash_password, hash_password_with_salt, verify_password, PasswordDigest};
pub use token::{Claims, encode_claims, encode_jwt, ROLE_ADMIN};
