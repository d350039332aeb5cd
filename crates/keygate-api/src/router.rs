//! Route definitions for the Keygate HTTP API.
//!
//! Versioned routes are mounted under `/api/v1`; `/health` sits at the root.
//! Protected route groups carry the authenticate middleware, and role-gated
//! groups add authorize inside it.

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
};

use keygate_core::error::AppError;
use keygate_entity::user::UserRole;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware::auth::authenticate;
use crate::middleware::logging::request_logging;
use crate::middleware::rbac::authorize;
use crate::state::AppState;

/// Build the Axum router with all routes and per-route middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes(&state))
        .merge(admin_routes(&state));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health::health))
        .fallback(not_found)
        .layer(from_fn(request_logging))
        .with_state(state)
}

/// Auth endpoints: signup, login, refresh. Refresh reads its own bearer.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/token/refresh", post(handlers::auth::refresh))
}

/// Endpoints for any authenticated user.
fn user_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::user::me))
        .route_layer(from_fn_with_state(state.clone(), authenticate))
}

/// Admin-only endpoints.
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/users/{id}", get(handlers::admin::users::get_user))
        .route("/admin/users/{id}/role", put(handlers::admin::users::set_role))
        .route_layer(from_fn_with_state(UserRole::Admin, authorize))
        .route_layer(from_fn_with_state(state.clone(), authenticate))
}

async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
