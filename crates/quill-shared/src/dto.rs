//! Data Transfer Objects - request bodies accepted by the API.
//!
//! Both bodies are explicit allow-lists: `id`, `authorId` and the timestamps
//! are not representable here, so ownership and bookkeeping stay
//! store-controlled no matter what a caller sends (unknown JSON fields are
//! silently dropped). Every field is optional at the serde layer; presence
//! requirements belong to the entity schema, which answers with its own
//! field-naming messages instead of a deserializer error.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/posts`. Missing required fields surface as store
/// validation errors, not 422s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}

/// Body of `PUT /api/posts/{slug}` - a patch: fields present in the body
/// overwrite the stored record, absent fields are left untouched, and the
/// merged record is re-validated in full before the write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}
