//! # Authentication Data Transfer Objects
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /api/auth/register` - [`UserDto`] -> [`RegisteredUser`]
//! - `POST /api/auth/login` - [`UserDto`] -> compact JWT (`text/plain`)
//!
//! ## Wire Format
//!
//! [`UserDto`] fields are single words; [`RegisteredUser`] uses **camelCase**
//! (`passwordHash`, `passwordSalt`). Optional fields are omitted when `None`.
//!
//! ```text
//! POST /api/auth/register
//! Content-Type: application/json
//!
//! { "username": "alice", "password": "MyPassword123!" }
//! ```
//!
//! Response (default):
//! ```text
//! { "username": "alice" }
//! ```
//!
//! Response with `AUTH_EXPOSE_PASSWORD_HASH=true`:
//! ```text
//! { "username": "alice", "passwordHash": "q0H3...==", "passwordSalt": "9xk2...==" }
//! ```

use crate::model::User;
use lib_utils::b64_encode;
use serde::{Deserialize, Serialize};

/// Credentials posted to both register and login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    pub username: String,
    pub password: String,
}

/// Registration response: the stored record.
///
/// `password_hash` and `password_salt` (standard base64) are only filled in
/// when the server is configured to expose them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_salt: Option<String>,
}

impl RegisteredUser {
    pub fn from_user(user: &User, expose_password_hash: bool) -> Self {
        let (password_hash, password_salt) = if expose_password_hash {
            (
                Some(b64_encode(&user.password_hash)),
                Some(b64_encode(&user.password_salt)),
            )
        } else {
            (None, None)
        };

        Self {
            username: user.username.clone(),
            password_hash,
            password_salt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("alice".to_string(), vec![0xde, 0xad], vec![0xbe, 0xef])
    }

    #[test]
    fn test_hash_and_salt_hidden_by_default() {
        let json = serde_json::to_value(RegisteredUser::from_user(&user(), false)).unwrap();

        assert_eq!(json, serde_json::json!({ "username": "alice" }));
    }

    #[test]
    fn test_hash_and_salt_exposed_on_opt_in() {
        let json = serde_json::to_value(RegisteredUser::from_user(&user(), true)).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(json["passwordHash"], "3q0=");
        assert_eq!(json["passwordSalt"], "vu8=");
        assert!(json.get("password_hash").is_none());
    }
}
