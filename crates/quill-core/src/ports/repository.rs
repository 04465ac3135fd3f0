use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Post store port.
///
/// Adapters own the schema contract: they run the entity validators before
/// every write, enforce slug uniqueness, and maintain `created_at` /
/// `updated_at` (callers never control the timestamps).
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first (`created_at` descending - a hard contract,
    /// not incidental ordering). `published` narrows to matching posts.
    async fn list(&self, published: Option<bool>) -> Result<Vec<Post>, RepoError>;

    /// Look up a single post by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Validated insert. Fails with [`RepoError::Constraint`] when the slug
    /// collides with an existing post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Validated overwrite of an existing post, keyed by its immutable id.
    /// Fails with [`RepoError::NotFound`] if the row vanished in the meantime.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Permanently remove the post with this slug. [`RepoError::NotFound`] if
    /// no such post exists.
    async fn delete_by_slug(&self, slug: &str) -> Result<(), RepoError>;
}
