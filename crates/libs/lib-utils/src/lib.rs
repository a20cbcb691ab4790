//! # Utilities Library
//!
//! Shared utility functions for base64 encoding, environment variables and time.

pub mod b64;
pub mod envs;
pub mod time;

// Re-export commonly used functions
pub use b64::{b64_encode, b64u_decode, b64u_decode_to_string};
pub use envs::{parse_env_or, require_env};
pub use time::{now_utc, unix_timestamp};
