//! # Register Tests

use super::*;
use base64::Engine as _;
use lib_auth::verify_password;

#[tokio::test]
async fn test_register_returns_username_only_by_default() {
    let app = test_app(test_config());

    let response = register(&app, "testuser", "TestPassword123!").await;

    assert_status(&response, StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "username": "testuser" }));
}

#[tokio::test]
async fn test_register_exposes_hash_and_salt_on_opt_in() {
    let mut config = test_config();
    config.expose_password_hash = true;
    let app = test_app(config);

    let response = register(&app, "testuser", "TestPassword123!").await;

    assert_status(&response, StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "testuser");

    let engine = base64::engine::general_purpose::STANDARD;
    let hash = engine.decode(json["passwordHash"].as_str().unwrap()).unwrap();
    let salt = engine.decode(json["passwordSalt"].as_str().unwrap()).unwrap();

    assert_eq!(hash.len(), 64);
    assert_eq!(salt.len(), 128);
    assert!(verify_password("TestPassword123!", &hash, &salt).unwrap());
}

#[tokio::test]
async fn test_register_accepts_any_password() {
    let app = test_app(test_config());

    for password in ["", "a", "P@ssw0rd!#$%", "пароль"] {
        let response = register(&app, "user_test-123", password).await;
        assert_status(&response, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_register_response_is_not_cacheable() {
    let app = test_app(test_config());

    let response = register(&app, "testuser", "pw").await;

    assert_eq!(response.headers()["cache-control"], "no-store");
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let app = test_app(test_config());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"username": "testuser"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
