//! # keygate-api
//!
//! HTTP API layer for Keygate built on Axum.
//!
//! Provides the signup, login and refresh endpoints, the authenticate and
//! authorize middleware pair that guards protected routes, extractors,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
