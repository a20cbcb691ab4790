//! # Credential Store
//!
//! Holds at most one [`User`]. Every registration replaces the record
//! wholesale, so the last write wins.
//!
//! The store is cheap to clone; clones share the same slot.
//!
//! ```rust,no_run
//! use lib_core::{CredentialStore, User};
//!
//! # async fn example() {
//! let store = CredentialStore::new();
//! store.replace(User::new("alice".into(), vec![1], vec![2])).await;
//! assert_eq!(store.snapshot().await.unwrap().username, "alice");
//! # }
//! ```

use super::models::User;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    slot: Arc<RwLock<Option<User>>>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored record and return what was stored.
    pub async fn replace(&self, user: User) -> User {
        let mut slot = self.slot.write().await;
        *slot = Some(user.clone());
        tracing::debug!("[STORE] Credential record replaced");
        user
    }

    /// Clone the current record so callers can work on it without holding the lock.
    pub async fn snapshot(&self) -> Option<User> {
        self.slot.read().await.clone()
    }
}
