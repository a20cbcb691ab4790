//! # Auth Handler Tests
//!
//! Test suite for the register and login handlers, driven through the full router.

mod register;

use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use lib_core::{dto::UserDto, Config};
use tower::ServiceExt;

pub const TEST_KEY: &str = "test-secret-key-must-be-at-least-sixty-four-bytes-long-for-hs512!!";

/// Create test config
pub fn test_config() -> Config {
    Config {
        token_key: TEST_KEY.to_string(),
        token_expiration_hours: 24,
        expose_password_hash: false,
    }
}

/// Create test app with routes and middleware
pub fn test_app(config: Config) -> Router {
    create_router(AppState::new(config), vec![])
}

pub fn creds(username: &str, password: &str) -> UserDto {
    UserDto {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// POST a JSON body to `uri` on a clone of `app`.
pub async fn post_json(app: &Router, uri: &str, body: &UserDto) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn register(app: &Router, username: &str, password: &str) -> Response<Body> {
    post_json(app, "/api/auth/register", &creds(username, password)).await
}

pub async fn login(app: &Router, username: &str, password: &str) -> Response<Body> {
    post_json(app, "/api/auth/login", &creds(username, password)).await
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

pub fn assert_status(response: &Response<Body>, status: StatusCode) {
    assert_eq!(response.status(), status);
}

/// Assert a 400 whose body is exactly `message` as plain text.
pub async fn assert_plain_text_rejection(response: Response<Body>, message: &str) {
    assert_status(&response, StatusCode::BAD_REQUEST);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(body_string(response).await, message);
}
