//! Integration tests for the authenticate and authorize middleware.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use keygate_auth::jwt::JwtEncoder;
use keygate_entity::user::{User, UserRole};

use helpers::TestApp;

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "OK");
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let app = TestApp::new();
    let token = app.signup("me@example.com", "pw").await;

    let response = app.request("GET", "/api/v1/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "me@example.com");
    assert_eq!(response.body["role"], "user");
}

#[tokio::test]
async fn test_missing_or_malformed_bearer_is_unauthorized() {
    let app = TestApp::new();
    let token = app.signup("h@example.com", "pw").await;

    let headers = [
        None,
        Some(String::new()),
        Some("Bearer".to_string()),
        Some("Bearer ".to_string()),
        Some(format!("bearer {token}")),
        Some(format!("Token {token}")),
        Some("Bearer not.a.token".to_string()),
        Some("Bearer onlyonesegment".to_string()),
    ];

    for header in headers {
        let response = app
            .raw_request("GET", "/api/v1/me", None, header.as_deref())
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header:?}");
        assert_eq!(response.error_code(), "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_token_signed_with_other_key_is_unauthorized() {
    let app = TestApp::new();
    app.signup("k@example.com", "pw").await;

    let mut other = app.config.auth.clone();
    other.jwt_secret = "some-other-key".to_string();
    let user = User {
        id: 1,
        email: "k@example.com".to_string(),
        role: UserRole::Admin,
        created_at: Utc::now(),
    };
    let forged = JwtEncoder::new(&other).unwrap().issue(&user).unwrap();

    let response = app.request("GET", "/api/v1/me", None, Some(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_missing_user_is_unauthorized() {
    let app = TestApp::new();
    let ghost = User {
        id: 999,
        email: "ghost@example.com".to_string(),
        role: UserRole::User,
        created_at: Utc::now(),
    };
    let token = JwtEncoder::new(&app.config.auth).unwrap().issue(&ghost).unwrap();

    let response = app.request("GET", "/api/v1/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_forbids_user_role() {
    let app = TestApp::new();
    let token = app.signup("plain@example.com", "pw").await;

    let response = app
        .request("GET", "/api/v1/admin/users/1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
}

#[tokio::test]
async fn test_admin_route_requires_authentication_first() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/v1/admin/users/1", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_allows_admin() {
    let app = TestApp::new();
    let token = app.signup_admin("root@example.com", "pw").await;

    let response = app
        .request("GET", "/api/v1/admin/users/1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "root@example.com");
    assert_eq!(response.body["role"], "admin");
}

#[tokio::test]
async fn test_role_change_applies_to_existing_token() {
    let app = TestApp::new();
    let token = app.signup("flip@example.com", "pw").await;

    let before = app
        .request("GET", "/api/v1/admin/users/1", None, Some(&token))
        .await;
    assert_eq!(before.status, StatusCode::FORBIDDEN);

    app.set_role("flip@example.com", UserRole::Admin).await;
    let after = app
        .request("GET", "/api/v1/admin/users/1", None, Some(&token))
        .await;
    assert_eq!(after.status, StatusCode::OK);

    app.set_role("flip@example.com", UserRole::User).await;
    let demoted = app
        .request("GET", "/api/v1/admin/users/1", None, Some(&token))
        .await;
    assert_eq!(demoted.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_user_lookup_errors() {
    let app = TestApp::new();
    let token = app.signup_admin("root@example.com", "pw").await;

    let missing = app
        .request("GET", "/api/v1/admin/users/42", None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let bad_id = app
        .request("GET", "/api/v1/admin/users/abc", None, Some(&token))
        .await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_sets_role() {
    let app = TestApp::new();
    let admin = app.signup_admin("root@example.com", "pw").await;
    let user_token = app.signup("target@example.com", "pw").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/admin/users/2/role",
            Some(serde_json::json!({ "role": "admin" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "admin");

    let me = app.request("GET", "/api/v1/me", None, Some(&user_token)).await;
    assert_eq!(me.body["role"], "admin");

    let invalid = app
        .request(
            "PUT",
            "/api/v1/admin/users/2/role",
            Some(serde_json::json!({ "role": "superuser" })),
            Some(&admin),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/v1/nope", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}
