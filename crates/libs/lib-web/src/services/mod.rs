//! # Services Layer
//!
//! Business logic sitting between the HTTP handlers and the credential store.
//!
//! ```text
//! Handlers (HTTP) → Services (Business Logic) → CredentialStore / lib-auth
//! ```
//!
//! Services hold their dependencies and return `Result<T, AppError>`,
//! converting lower-level errors (hashing, signing) into `AppError` variants.

pub mod credentials;

// Re-export services for convenience
pub use credentials::AuthService;
