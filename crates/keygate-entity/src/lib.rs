//! # keygate-entity
//!
//! Domain entity models for Keygate. Database entities derive
//! `sqlx::FromRow`; anything that crosses the HTTP boundary derives
//! `Serialize`.

pub mod user;
