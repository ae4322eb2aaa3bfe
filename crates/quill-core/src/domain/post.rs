use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Longest title the `posts.title` column accepts.
pub const TITLE_MAX_LEN: usize = 255;

/// Post entity - a blog post record.
///
/// `id` stays `None` until the post is first saved; the store assigns it and
/// it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<i32>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create an unsaved post stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Replace the title and mark the post as modified now.
    pub fn retitle(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.updated_at = Some(Utc::now());
    }

    /// Check a caller-supplied title before it reaches the store.
    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be blank".to_string()));
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {} characters",
                TITLE_MAX_LEN
            )));
        }
        Ok(())
    }
}
