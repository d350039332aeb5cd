//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use argon2::Params;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use keygate_api::{AppState, build_app};
use keygate_auth::jwt::JwtEncoder;
use keygate_auth::password::PasswordHasher;
use keygate_core::config::AppConfig;
use keygate_database::{MemoryUserStore, UserStore};
use keygate_entity::user::UserRole;

/// Signing key used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router, for out-of-band changes
    pub store: MemoryUserStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with the standard token lifetime
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a test application whose tokens are issued with `ttl`
    pub fn with_token_ttl(ttl: chrono::Duration) -> Self {
        Self::build(Some(ttl))
    }

    fn build(ttl: Option<chrono::Duration>) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = TEST_SECRET.to_string();
        config.database.url = "memory:".to_string();

        let store = MemoryUserStore::new();
        let hasher = PasswordHasher::with_params(
            Params::new(1024, 1, 1, None).expect("Invalid argon2 params"),
        );
        let encoder = match ttl {
            Some(ttl) => JwtEncoder::with_ttl(&config.auth, ttl),
            None => JwtEncoder::new(&config.auth).expect("Invalid token TTL"),
        };

        let state = AppState::with_components(
            config.clone(),
            Arc::new(store.clone()),
            hasher,
            encoder,
        );

        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    /// Sign up and return the issued token
    pub async fn signup(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/signup",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Signup failed: {:?}",
            response.body
        );
        response.token()
    }

    /// Sign up, promote to admin out of band, and return a token
    pub async fn signup_admin(&self, email: &str, password: &str) -> String {
        let token = self.signup(email, password).await;
        self.set_role(email, UserRole::Admin).await;
        token
    }

    /// Change a user's role directly in the store
    pub async fn set_role(&self, email: &str, role: UserRole) {
        let user = self
            .store
            .find_by_email(email)
            .await
            .expect("Store lookup failed")
            .expect("User not found");
        self.store
            .update_role(user.id, role)
            .await
            .expect("Role update failed");
    }

    /// Make an HTTP request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.raw_request(
            method,
            path,
            body.map(|b| serde_json::to_string(&b).expect("Failed to serialize body")),
            authorization.as_deref(),
        )
        .await
    }

    /// Make an HTTP request with a raw body and `Authorization` header value
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body.unwrap_or_default()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` if the body is not JSON
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The `token` field of an auth response
    pub fn token(&self) -> String {
        self.body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in response")
            .to_string()
    }

    /// The `user.role` field of an auth response
    pub fn user_role(&self) -> &str {
        self.body["user"]["role"].as_str().expect("No user.role in response")
    }

    /// The `error` code of an error response
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().expect("No error code in response")
    }
}
