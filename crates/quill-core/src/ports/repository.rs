use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Post store - the single owner of the canonical post records.
///
/// Every call is atomic on its own. Nothing spans calls, so a
/// `find_by_id` followed by `save` is last-write-wins under concurrency.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Fails with [`RepoError::NotFound`] when no post has this id.
    async fn find_by_id(&self, id: i32) -> Result<Post, RepoError>;

    /// Insert when `post.id` is unset (assigning a fresh id), otherwise
    /// update the existing record. Returns the stored post.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove the post. Its id no longer resolves afterwards.
    async fn delete(&self, post: &Post) -> Result<(), RepoError>;
}
