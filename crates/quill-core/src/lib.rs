//! # Quill Core
//!
//! The domain layer of Quill: the `Post` entity and the store port that
//! infrastructure implements. No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::Post;
pub use error::{DomainError, RepoError};
