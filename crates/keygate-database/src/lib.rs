//! # keygate-database
//!
//! The user store boundary. [`UserStore`] is the interface the
//! authentication core consumes; [`UserRepository`] implements it on
//! PostgreSQL and [`MemoryUserStore`] implements it in-process.

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryUserStore;
pub use repositories::user::UserRepository;
pub use store::UserStore;
