//! # Quill Infrastructure
//!
//! Concrete implementations of the post store defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//!
//! With default features off only the in-memory store is built.

pub mod database;
pub mod store;

pub use database::DatabaseConfig;
pub use store::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::SeaOrmPostRepository;
