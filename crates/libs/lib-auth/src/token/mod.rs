//! # JWT Token Issuance
//!
//! Builds the claim set for an authenticated user and signs it with HS512.
//! The service never decodes its own tokens.

use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use lib_utils::{now_utc, unix_timestamp};
use serde::{Deserialize, Serialize};

/// Role granted to every authenticated user.
pub const ROLE_ADMIN: &str = "Admin";

/// JWT claims issued on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub name: String,
    /// Role, always [`ROLE_ADMIN`]
    pub role: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for `username`, issued at `issued_at` and valid for `expiration_hours`.
    pub fn new(username: impl Into<String>, issued_at: DateTime<Utc>, expiration_hours: i64) -> Self {
        let exp = issued_at + Duration::hours(expiration_hours);

        Self {
            name: username.into(),
            role: ROLE_ADMIN.to_string(),
            iat: unix_timestamp(issued_at),
            exp: unix_timestamp(exp),
        }
    }
}

/// Sign `claims` with HS512 and serialize to compact form.
pub fn encode_claims(claims: &Claims, secret: &str) -> Result<String> {
    let token = encode(
        &Header::new(Algorithm::HS512),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Issue a token for `username`, valid for `expiration_hours` from now.
pub fn encode_jwt(username: &str, secret: &str, expiration_hours: i64) -> Result<String> {
    let claims = Claims::new(username, now_utc(), expiration_hours);

    encode_claims(&claims, secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    const SECRET: &str = "test-secret-key-must-be-at-least-sixty-four-bytes-long-for-hs512!!";

    #[test]
    fn test_jwt_claims_and_signature() {
        let token = encode_jwt("testuser", SECRET, 24)
            .expect("JWT encoding should succeed");

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(decode_header(&token).unwrap().alg, Algorithm::HS512);

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::new(Algorithm::HS512),
        )
        .expect("JWT should verify with the signing key");

        assert_eq!(data.claims.name, "testuser");
        assert_eq!(data.claims.role, "Admin");
        assert_eq!(data.claims.exp - data.claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_jwt_rejected_with_other_key() {
        let token = encode_jwt("testuser", SECRET, 24).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"some-other-key"),
            &Validation::new(Algorithm::HS512),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_fixed_time_and_key_is_deterministic() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::new("alice", issued_at, 24);

        assert_eq!(claims.iat, 1_704_110_400);
        assert_eq!(claims.exp, 1_704_196_800);
        assert_eq!(
            encode_claims(&claims, SECRET).unwrap(),
            encode_claims(&claims, SECRET).unwrap()
        );
    }

    #[test]
    fn test_payload_segment_is_plain_json() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let token = encode_claims(&Claims::new("bob", issued_at, 24), SECRET).unwrap();

        let payload = token.split('.').nth(1).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&lib_utils::b64u_decode_to_string(payload).unwrap()).unwrap();

        assert_eq!(json["name"], "bob");
        assert_eq!(json["role"], "Admin");
        assert_eq!(json["exp"], 1_704_196_800_i64);
    }
}
