//! Role checks on an authenticated identity.

pub mod enforcer;

pub use enforcer::require_role;
