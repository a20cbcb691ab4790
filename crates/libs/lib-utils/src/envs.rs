//! # Environment Variables
//!
//! Helpers for turning raw environment values into typed settings.
//!
//! The helpers take the looked-up value rather than reading the process
//! environment, so callers can feed them `std::env::var(name).ok()` or any
//! other source.

use std::str::FromStr;

/// Require a value to be present.
pub fn require_env(name: &'static str, value: Option<String>) -> Result<String, Error> {
    value.ok_or(Error::MissingEnv(name))
}

/// Parse a value, falling back to `default` when absent.
///
/// A value that is present but unparsable is an error, not a fallback.
pub fn parse_env_or<T: FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, Error> {
    match value {
        Some(val) => val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name)),
        None => Ok(default),
    }
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
