//! Integration tests for signup, login and refresh.

mod helpers;

use axum::http::StatusCode;
use keygate_auth::jwt::{JwtDecoder, TokenError};
use keygate_database::UserStore;

use helpers::TestApp;

fn credentials(email: &str, password: &str) -> Option<serde_json::Value> {
    Some(serde_json::json!({ "email": email, "password": password }))
}

#[tokio::test]
async fn test_signup_returns_token_and_user() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/v1/auth/signup", credentials("new@example.com", "pw123"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.token().is_empty());
    assert_eq!(response.body["user"]["email"], "new@example.com");
    assert_eq!(response.user_role(), "user");
    assert!(response.body["user"]["id"].is_i64());
    assert!(response.body["user"]["created_at"].is_string());
    assert!(response.body["user"].get("password").is_none());
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_then_login() {
    let app = TestApp::new();
    app.signup("alice@example.com", "s3cret").await;

    let response = app
        .request("POST", "/api/v1/auth/login", credentials("alice@example.com", "s3cret"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "alice@example.com");

    let decoder = JwtDecoder::new(&app.config.auth);
    let claims = decoder.decode(&response.token()).unwrap();
    let stored = app.store.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_eq!(claims.user_id, stored.id);
}

#[tokio::test]
async fn test_signup_duplicate_email_is_conflict() {
    let app = TestApp::new();
    app.signup("dup@example.com", "pw").await;

    let response = app
        .request("POST", "/api/v1/auth/signup", credentials("dup@example.com", "other"), None)
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_signup_rejects_empty_fields() {
    let app = TestApp::new();

    for body in [
        credentials("", "pw"),
        credentials("a@example.com", ""),
        Some(serde_json::json!({ "email": "a@example.com" })),
    ] {
        let response = app.request("POST", "/api/v1/auth/signup", body, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
    }
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .raw_request("POST", "/api/v1/auth/login", Some("{not json".to_string()), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.signup("known@example.com", "right").await;

    let wrong_password = app
        .request("POST", "/api/v1/auth/login", credentials("known@example.com", "wrong"), None)
        .await;
    let unknown_email = app
        .request("POST", "/api/v1/auth/login", credentials("unknown@example.com", "right"), None)
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.error_code(), "INVALID_CREDENTIALS");
    assert_eq!(wrong_password.text, unknown_email.text);
}

#[tokio::test]
async fn test_refresh_issues_new_token() {
    let app = TestApp::new();
    let token = app.signup("r@example.com", "pw").await;

    let response = app
        .request("POST", "/api/v1/auth/token/refresh", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "r@example.com");

    let decoder = JwtDecoder::new(&app.config.auth);
    assert!(decoder.decode(&response.token()).is_ok());
    // The presented token stays valid until its own expiry.
    assert!(decoder.decode(&token).is_ok());
}

#[tokio::test]
async fn test_refresh_carries_current_role() {
    let app = TestApp::new();
    let token = app.signup("promoted@example.com", "pw").await;
    app.set_role("promoted@example.com", keygate_entity::user::UserRole::Admin).await;

    let response = app
        .request("POST", "/api/v1/auth/token/refresh", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.user_role(), "admin");

    let claims = JwtDecoder::new(&app.config.auth).decode(&response.token()).unwrap();
    assert_eq!(claims.role, keygate_entity::user::UserRole::Admin);
}

#[tokio::test]
async fn test_refresh_with_expired_token_is_unauthorized() {
    let app = TestApp::with_token_ttl(chrono::Duration::seconds(-5));
    let token = app.signup("late@example.com", "pw").await;
    assert_eq!(
        JwtDecoder::new(&app.config.auth).decode(&token),
        Err(TokenError::Expired)
    );

    let response = app
        .request("POST", "/api/v1/auth/token/refresh", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_refresh_without_bearer_is_unauthorized() {
    let app = TestApp::new();

    let missing = app.request("POST", "/api/v1/auth/token/refresh", None, None).await;
    let wrong_scheme = app
        .raw_request("POST", "/api/v1/auth/token/refresh", None, Some("Basic abc"))
        .await;

    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_scheme.status, StatusCode::UNAUTHORIZED);
}
