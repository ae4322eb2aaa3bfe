//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

struct Records {
    posts: BTreeMap<i32, Post>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
}

/// In-memory post store using a `BTreeMap` behind an async `RwLock`.
///
/// Ids start at 1 and are never reused, even after a delete.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    records: RwLock<Records>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                posts: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let records = self.records.read().await;
        Ok(records.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Post, RepoError> {
        let records = self.records.read().await;
        records
            .posts
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        // One write lock per call keeps each save atomic
        let mut records = self.records.write().await;

        let id = match post.id {
            None => {
                let id = records
                    .next_id
                    .ok_or_else(|| RepoError::Constraint("post id sequence exhausted".into()))?;
                records.next_id = id.checked_add(1);
                post.id = Some(id);
                tracing::debug!(post_id = id, "Inserting post");
                id
            }
            Some(id) => {
                let stored = records.posts.get(&id).ok_or(RepoError::NotFound(id))?;
                post.created_at = stored.created_at;
                tracing::debug!(post_id = id, "Updating post");
                id
            }
        };

        records.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn delete(&self, post: &Post) -> Result<(), RepoError> {
        let id = post.id.ok_or(RepoError::Unsaved)?;
        let mut records = self.records.write().await;
        records
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound(id))
    }
}
