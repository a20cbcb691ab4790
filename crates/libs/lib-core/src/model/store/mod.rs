//! # Credential Store
//!
//! In-memory storage for the single registered user.

// region: --- Modules
pub mod credential_store;
pub mod models;
// endregion: --- Modules

// region: --- Re-exports
pub use credential_store::CredentialStore;
// endregion: --- Re-exports
