//! # Credential Service
//!
//! Registration, password verification and login for the single stored user.
//!
//! ```rust,no_run
//! use lib_core::{Config, CredentialStore};
//! use lib_web::services::AuthService;
//!
//! # async fn example(config: Config) -> lib_core::Result<()> {
//! let auth = AuthService::new(CredentialStore::new(), config);
//! auth.register("alice", "hunter2").await?;
//! let token = auth.login("alice", "hunter2").await?;
//! # Ok(())
//! # }
//! ```

use lib_auth::{encode_jwt, hash_password, verify_password};
use lib_core::{AppError, Config, CredentialStore, Result, User};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct AuthService {
    store: CredentialStore,
    config: Config,
}

impl AuthService {
    pub fn new(store: CredentialStore, config: Config) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hash `password` under a fresh salt and overwrite the stored user.
    ///
    /// There is no duplicate check and no password policy: any input is accepted
    /// and the previous user, if any, is gone.
    pub async fn register(&self, username: &str, password: &str) -> Result<User> {
        let digest = hash_password(password).map_err(internal)?;
        let user = User::new(username.to_string(), digest.hash, digest.salt);

        Ok(self.store.replace(user).await)
    }

    /// Check `password` against a stored hash and salt.
    pub fn verify_password(&self, password: &str, stored_hash: &[u8], stored_salt: &[u8]) -> Result<bool> {
        verify_password(password, stored_hash, stored_salt).map_err(internal)
    }

    /// Authenticate against the stored user and issue a token.
    ///
    /// # Errors
    ///
    /// - [`AppError::UserNotFound`] if nobody is registered or the username differs
    /// - [`AppError::InvalidCredentials`] if the password does not match
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        // Snapshot, then hash outside the lock.
        let user = self
            .store
            .snapshot()
            .await
            .filter(|user| user.username == username)
            .ok_or(AppError::UserNotFound)?;

        if !self.verify_password(password, &user.password_hash, &user.password_salt)? {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(&user)
    }

    /// Sign a token carrying the user's name and the admin role.
    pub fn create_token(&self, user: &User) -> Result<String> {
        debug!("[TOKEN] Issuing token, valid for {}h", self.config.token_expiration_hours);

        encode_jwt(&user.username, &self.config.token_key, self.config.token_expiration_hours)
            .map_err(internal)
    }
}

fn internal(err: lib_auth::Error) -> AppError {
    AppError::Internal(err.to_string())
}
