//! HTML views rendered with askama.

use askama::Template;
use quill_core::domain::Post;
use quill_core::error::RepoError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Display form of a stored post.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl TryFrom<&Post> for PostView {
    type Error = RepoError;

    fn try_from(post: &Post) -> Result<Self, Self::Error> {
        Ok(Self {
            id: post.id.ok_or(RepoError::Unsaved)?,
            title: post.title.clone(),
            created_at: post.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: post
                .updated_at
                .map(|at| at.format(TIMESTAMP_FORMAT).to_string()),
        })
    }
}

/// The home page: every post.
#[derive(Template)]
#[template(path = "post/browse.html")]
pub struct BrowseTemplate {
    pub posts: Vec<PostView>,
}

impl BrowseTemplate {
    pub fn new(posts: &[Post]) -> Result<Self, RepoError> {
        let posts = posts
            .iter()
            .map(PostView::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self { posts })
    }
}

#[derive(Template)]
#[template(path = "post/read.html")]
pub struct ReadTemplate {
    pub post: PostView,
}

impl ReadTemplate {
    pub fn new(post: &Post) -> Result<Self, RepoError> {
        Ok(Self {
            post: PostView::try_from(post)?,
        })
    }
}
