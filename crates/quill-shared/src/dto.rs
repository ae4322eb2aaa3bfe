//! Data Transfer Objects - request types for the post forms.

use serde::{Deserialize, Serialize};

/// Urlencoded body accepted by the add and edit routes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: Option<String>,
}
