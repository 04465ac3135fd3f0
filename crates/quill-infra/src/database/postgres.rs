//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
///
/// Owns the schema contract: runs the entity validators before every write,
/// stamps the timestamps, and translates the unique slug index's rejection
/// into [`RepoError::Constraint`].
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Translate a write failure. Postgres reports unique-index violations with
/// "duplicate key ... unique constraint" in the message; the only unique
/// index on `posts` is the slug.
fn map_write_err(e: DbErr) -> RepoError {
    if matches!(e, DbErr::RecordNotUpdated) {
        return RepoError::NotFound;
    }
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") {
        RepoError::Constraint("A post with this slug already exists".to_string())
    } else {
        RepoError::Query(msg)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, published: Option<bool>) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find().order_by_desc(post::Column::CreatedAt);

        if let Some(published) = published {
            query = query.filter(post::Column::Published.eq(published));
        }

        let result = query
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, mut post: Post) -> Result<Post, RepoError> {
        post.normalize();
        post.validate()?;

        let now = Utc::now();
        post.created_at = now;
        post.updated_at = now;

        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn update(&self, mut post: Post) -> Result<Post, RepoError> {
        post.normalize();
        post.validate()?;

        post.updated_at = Utc::now();

        // Keyed by the primary key; zero matched rows means the post was
        // deleted between the caller's read and this write.
        let model = post::ActiveModel::from(post)
            .update(&self.db)
            .await
            .map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::Slug.eq(slug))
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
