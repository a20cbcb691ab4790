//! # HTTP Request Handlers
//!
//! Axum HTTP request handlers organized by feature domain. Handlers delegate
//! business logic to services in the [`crate::services`] module.
//!
//! ## Handler Modules
//!
//! - **[`auth`]**: Registration and login
//!   - `POST /api/auth/register` - Store the (single) user
//!   - `POST /api/auth/login` - Authenticate and receive a JWT

pub mod auth;
