//! Request authentication: bearer extraction and identity resolution.

pub mod authenticator;
pub mod bearer;

pub use authenticator::Authenticator;
pub use bearer::extract_bearer;
