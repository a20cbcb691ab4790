//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] returned by
//! the auth services and handlers. It follows the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Client Errors** (400) - Login failures, reported with a fixed message
//!    - [`UserNotFound`](AppError::UserNotFound) → `"User not found"`
//!    - [`InvalidCredentials`](AppError::InvalidCredentials) → `"Wrong Password"`
//!
//! 2. **Server Errors** (500) - Internal/system issues, message hidden from clients
//!    - [`Config`](AppError::Config)
//!    - [`Internal`](AppError::Internal)
//!
//! ## Response Body
//!
//! Client errors send the message alone as `text/plain`:
//!
//! ```text
//! Wrong Password
//! ```
//!
//! Server errors send a JSON envelope:
//!
//! ```text
//! { "error": "An internal error occurred", "code": "Internal" }
//! ```

use thiserror::Error;
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The username does not match the registered user (or nobody is registered).
    #[error("User not found")]
    UserNotFound,

    /// The password does not reproduce the stored hash.
    #[error("Wrong Password")]
    InvalidCredentials,

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UserNotFound | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message.
    ///
    /// For internal errors, returns a generic message to avoid exposing implementation details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::UserNotFound | AppError::InvalidCredentials => self.to_string(),
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    /// Variant name, sent as the `code` field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UserNotFound => "UserNotFound",
            AppError::InvalidCredentials => "InvalidCredentials",
            AppError::Config(_) => "Config",
            AppError::Internal(_) => "Internal",
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        match self {
            // Login failures answer with the bare message as text/plain.
            AppError::UserNotFound | AppError::InvalidCredentials => {
                (status, self.user_message()).into_response()
            }
            AppError::Config(_) | AppError::Internal(_) => {
                let body = Json(json!({
                    "error": self.user_message(),
                    "code": self.code(),
                }));

                (status, body).into_response()
            }
        }
    }
}
