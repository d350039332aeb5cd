//! Auth handlers: signup, login, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use crate::dto::request::AuthRequest;
use crate::dto::response::AuthResponse;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let session = state.issuer.signup(&req.email, &req.password).await?;
    Ok(Json(session.into()))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AuthRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let session = state.issuer.login(&req.email, &req.password).await?;
    Ok(Json(session.into()))
}

/// POST /api/v1/auth/token/refresh
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AuthResponse>, ApiError> {
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let session = state.issuer.refresh(authorization).await?;
    Ok(Json(session.into()))
}
