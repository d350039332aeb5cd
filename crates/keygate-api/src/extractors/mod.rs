//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::CurrentUser;
pub use json::ApiJson;
pub use path::parse_user_id;
