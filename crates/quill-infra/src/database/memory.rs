//! In-memory post repository - used as fallback when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post store using a Vec behind an async RwLock.
///
/// Implements the same contract as the PostgreSQL adapter: validation before
/// every write, slug uniqueness, newest-first listing, and store-controlled
/// timestamps. Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
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
    async fn list(&self, published: Option<bool>) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        let mut result: Vec<Post> = posts
            .iter()
            .filter(|p| published.is_none_or(|want| p.published == want))
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn insert(&self, mut post: Post) -> Result<Post, RepoError> {
        post.normalize();
        post.validate()?;

        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::Constraint(
                "A post with this slug already exists".to_string(),
            ));
        }

        let now = Utc::now();
        post.created_at = now;
        post.updated_at = now;

        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, mut post: Post) -> Result<Post, RepoError> {
        post.normalize();
        post.validate()?;

        let mut posts = self.posts.write().await;

        // A slug rename must not collide with any other post.
        if posts.iter().any(|p| p.slug == post.slug && p.id != post.id) {
            return Err(RepoError::Constraint(
                "A post with this slug already exists".to_string(),
            ));
        }

        let stored = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;

        post.created_at = stored.created_at;
        post.updated_at = Utc::now();

        *stored = post.clone();
        Ok(post)
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        let before = posts.len();
        posts.retain(|p| p.slug != slug);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn post(slug: &str) -> Post {
        Post::new(
            format!("Title for {slug}"),
            slug,
            "content",
            "excerpt",
            "Ada",
            Some(Uuid::new_v4()),
        )
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        for slug in ["first", "second", "third"] {
            repo.insert(post(slug)).await.unwrap();
            // Distinct created_at stamps.
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let all = repo.list(None).await.unwrap();
        let slugs: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn list_filters_on_published() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("draft")).await.unwrap();

        let mut live = post("live");
        live.published = true;
        repo.insert(live).await.unwrap();

        let published = repo.list(Some(true)).await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].slug, "live");

        let drafts = repo.list(Some(false)).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].slug, "draft");

        assert_eq!(repo.list(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn duplicate_slug_rejected_and_first_post_untouched() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("taken")).await.unwrap();

        let mut second = post("taken");
        second.title = "Impostor".into();
        let err = repo.insert(second).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));

        let stored = repo.find_by_slug("taken").await.unwrap().unwrap();
        assert_eq!(stored.title, "Title for taken");
    }

    #[tokio::test]
    async fn insert_stamps_timestamps() {
        let repo = InMemoryPostRepository::new();
        let mut candidate = post("stamped");
        // Caller-supplied timestamps must be overwritten.
        candidate.created_at = Utc::now() - chrono::TimeDelta::days(30);
        candidate.updated_at = candidate.created_at;

        let stored = repo.insert(candidate).await.unwrap();
        assert!(Utc::now() - stored.created_at < chrono::TimeDelta::seconds(5));
        assert_eq!(stored.created_at, stored.updated_at);
    }

    #[tokio::test]
    async fn update_keeps_created_at_and_bumps_updated_at() {
        let repo = InMemoryPostRepository::new();
        let stored = repo.insert(post("evolving")).await.unwrap();

        let mut changed = stored.clone();
        changed.title = "New title".into();
        changed.created_at = Utc::now() + chrono::TimeDelta::days(1);

        let updated = repo.update(changed).await.unwrap();
        assert_eq!(updated.created_at, stored.created_at);
        assert!(updated.updated_at >= stored.updated_at);
        assert_eq!(updated.title, "New title");
    }

    #[tokio::test]
    async fn update_of_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo.update(post("ghost")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn slug_rename_onto_existing_slug_rejected() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("one")).await.unwrap();
        let two = repo.insert(post("two")).await.unwrap();

        let mut renamed = two.clone();
        renamed.slug = "one".into();
        let err = repo.update(renamed).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_post() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("doomed")).await.unwrap();

        repo.delete_by_slug("doomed").await.unwrap();
        assert!(repo.find_by_slug("doomed").await.unwrap().is_none());

        let err = repo.delete_by_slug("doomed").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn validation_runs_at_the_write_boundary() {
        let repo = InMemoryPostRepository::new();
        let mut invalid = post("untitled");
        invalid.title = "   ".into();

        let err = repo.insert(invalid).await.unwrap_err();
        assert_eq!(err.to_string(), "Please provide a title");
        assert_eq!(repo.list(None).await.unwrap().len(), 0);
    }
}
