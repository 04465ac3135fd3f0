use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;
/// Maximum excerpt length, in characters.
pub const EXCERPT_MAX_CHARS: usize = 300;

/// Post entity - a single blog post.
///
/// This is also the wire shape returned inside the response envelope, hence
/// the camelCase field names on the JSON side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier, immutable after creation.
    pub id: Uuid,
    pub title: String,
    /// Public lookup key, unique across all posts.
    pub slug: String,
    /// Markdown body; consumers render it, this layer does not.
    pub content: String,
    pub excerpt: String,
    /// Display name, independent of any account identity.
    pub author: String,
    /// Ownership anchor; set from the creating session, never caller-supplied.
    pub author_id: Option<Uuid>,
    pub cover_image: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new unpublished post owned by `author_id`. Timestamps are
    /// provisional; the store adapter stamps them on insert.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
        excerpt: impl Into<String>,
        author: impl Into<String>,
        author_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            slug: slug.into(),
            content: content.into(),
            excerpt: excerpt.into(),
            author: author.into(),
            author_id,
            cover_image: String::new(),
            published: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Trim the whitespace-sensitive fields. Adapters call this before
    /// [`Post::validate`] so that `"  "` counts as missing.
    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.slug = self.slug.trim().to_string();
        self.author = self.author.trim().to_string();
    }

    /// Enforce the schema constraints. Messages name the offending field and
    /// travel to API callers unchanged.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.is_empty() {
            return Err(DomainError::Validation("Please provide a title".into()));
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(
                "Title cannot be more than 200 characters".into(),
            ));
        }
        if self.slug.is_empty() {
            return Err(DomainError::Validation("Please provide a slug".into()));
        }
        if self.content.is_empty() {
            return Err(DomainError::Validation("Please provide content".into()));
        }
        if self.excerpt.is_empty() {
            return Err(DomainError::Validation("Please provide an excerpt".into()));
        }
        if self.excerpt.chars().count() > EXCERPT_MAX_CHARS {
            return Err(DomainError::Validation(
                "Excerpt cannot be more than 300 characters".into(),
            ));
        }
        if self.author.is_empty() {
            return Err(DomainError::Validation(
                "Please provide an author name".into(),
            ));
        }
        Ok(())
    }

    /// Whether `user_id` owns this post. A post without an `author_id` has no
    /// owner, so only admins can touch it.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.author_id == Some(user_id)
    }
}
