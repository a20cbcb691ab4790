//! # Model Layer
//!
//! Domain entities and the in-memory store that owns them.

pub mod store;

pub use store::models::User;
