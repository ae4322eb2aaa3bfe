//! # Quill Shared
//!
//! Request and error types exchanged over HTTP.

pub mod dto;
pub mod response;

pub use dto::PostForm;
pub use response::ErrorResponse;
