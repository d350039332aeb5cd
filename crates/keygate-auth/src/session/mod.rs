//! Signup, login and refresh orchestration.

pub mod issuer;

pub use issuer::{IssuedSession, SessionIssuer};
