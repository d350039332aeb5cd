//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;

use keygate_core::error::AppError;

use crate::dto::request::UpdateRoleRequest;
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, CurrentUser, parse_user_id};
use crate::state::AppState;

/// GET /api/v1/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    Ok(Json(user.into()))
}

/// PUT /api/v1/admin/users/{id}/role
pub async fn set_role(
    State(state): State<AppState>,
    CurrentUser(admin): CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateRoleRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = state
        .store
        .update_role(id, req.role)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

    info!(admin_id = admin.id, user_id = user.id, role = %user.role, "User role changed");
    Ok(Json(user.into()))
}
