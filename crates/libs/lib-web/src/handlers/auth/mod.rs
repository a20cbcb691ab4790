//! # Authentication Handlers
//!
//! HTTP request handlers for the registration and login endpoints.
//!
//! ```rust,no_run
//! use axum::{Router, routing::post};
//! use lib_web::handlers::auth::{register, login};
//! use lib_web::AppState;
//!
//! let app: Router<AppState> = Router::new()
//!     .route("/api/auth/register", post(register))
//!     .route("/api/auth/login", post(login));
//! ```

use crate::services::AuthService;
use axum::extract::{Json, State};
use lib_core::{dto::{RegisteredUser, UserDto}, Result};
use tracing::{debug, info, instrument, warn};

/// Register handler - hashes the password and replaces the stored user.
///
/// Always succeeds for well-formed JSON. The response carries the stored
/// record; hash and salt are included only when the server opts in.
#[instrument(skip_all, fields(username = %req.username))]
pub async fn register(
    State(auth): State<AuthService>,
    Json(req): Json<UserDto>,
) -> Result<Json<RegisteredUser>> {
    info!("[REGISTER] New registration request");

    debug!("[REGISTER] Hashing password...");
    let user = auth.register(&req.username, &req.password).await?;

    if auth.config().expose_password_hash {
        warn!("[REGISTER] Returning password hash and salt in response (AUTH_EXPOSE_PASSWORD_HASH)");
    }

    info!("[REGISTER] User stored, previous record replaced");

    Ok(Json(RegisteredUser::from_user(&user, auth.config().expose_password_hash)))
}

/// Login handler - verifies the password and returns the JWT as plain text.
///
/// # Returns
///
/// * `200` - compact JWT
/// * `400 "User not found"` - username does not match the stored user
/// * `400 "Wrong Password"` - password does not match
#[instrument(skip_all, fields(username = %req.username))]
pub async fn login(
    State(auth): State<AuthService>,
    Json(req): Json<UserDto>,
) -> Result<String> {
    info!("[LOGIN] Login attempt");

    let token = auth.login(&req.username, &req.password).await.inspect_err(|e| {
        warn!("[LOGIN] Rejected: {}", e);
    })?;

    info!("[LOGIN] User authenticated successfully");

    Ok(token)
}

#[cfg(test)]
mod tests;
