//! Admin-only handlers. Mounted behind `authorize(UserRole::Admin)`.

pub mod users;
