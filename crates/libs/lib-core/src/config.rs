//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! | variable                    | default | meaning                                    |
//! |-----------------------------|---------|--------------------------------------------|
//! | `APP_SETTINGS_TOKEN`        | —       | HS512 signing key (required)               |
//! | `TOKEN_EXPIRATION_HOURS`    | `24`    | token lifetime in hours                    |
//! | `AUTH_EXPOSE_PASSWORD_HASH` | `false` | echo hash and salt in the register response |

use crate::error::{AppError, Result};
use lib_utils::{parse_env_or, require_env};

/// Environment variable holding the token signing key (`AppSettings:Token`).
pub const TOKEN_KEY_ENV: &str = "APP_SETTINGS_TOKEN";

/// Minimum signing key length in bytes (HS512 output size).
pub const MIN_TOKEN_KEY_LEN: usize = 64;

/// Default token lifetime.
pub const DEFAULT_TOKEN_EXPIRATION_HOURS: i64 = 24;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Secret key for JWT signing
    ///
    /// **Must be at least 64 bytes long** for HS512.
    pub token_key: String,

    /// JWT token validity period in hours
    ///
    /// Valid range: 1-720 hours (1 hour to 30 days)
    pub token_expiration_hours: i64,

    /// Include the password hash and salt in the registration response.
    ///
    /// Off unless explicitly enabled; the hash and salt are secrets.
    pub expose_password_hash: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any name -> value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let token_key = require_env(TOKEN_KEY_ENV, lookup(TOKEN_KEY_ENV))
            .map_err(|_| AppError::Config(format!("{TOKEN_KEY_ENV} must be set in environment")))?;

        let token_expiration_hours = parse_env_or(
            "TOKEN_EXPIRATION_HOURS",
            lookup("TOKEN_EXPIRATION_HOURS"),
            DEFAULT_TOKEN_EXPIRATION_HOURS,
        )
        .map_err(|_| AppError::Config("TOKEN_EXPIRATION_HOURS must be a valid number".to_string()))?;

        let expose_password_hash =
            parse_env_or("AUTH_EXPOSE_PASSWORD_HASH", lookup("AUTH_EXPOSE_PASSWORD_HASH"), false)
                .map_err(|_| AppError::Config("AUTH_EXPOSE_PASSWORD_HASH must be true or false".to_string()))?;

        Ok(Self {
            token_key,
            token_expiration_hours,
            expose_password_hash,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.token_key.trim().is_empty() {
            return Err(AppError::Config(format!("{TOKEN_KEY_ENV} must not be empty")));
        }

        if self.token_key.len() < MIN_TOKEN_KEY_LEN {
            return Err(AppError::Config(format!(
                "{TOKEN_KEY_ENV} must be at least {MIN_TOKEN_KEY_LEN} bytes long"
            )));
        }

        if self.token_expiration_hours < 1 || self.token_expiration_hours > 720 {
            return Err(AppError::Config(
                "TOKEN_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string(),
            ));
        }

        Ok(())
    }

    /// Load from the process environment and validate in one step.
    pub fn load() -> Result<Self> {
        Self::load_from(|name| std::env::var(name).ok())
    }

    /// Load from `lookup` and validate.
    pub fn load_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let config = Self::from_lookup(lookup)?;
        config.validate()?;
        Ok(config)
    }
}
