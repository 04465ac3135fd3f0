//! Post collection and item endpoints.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::Post;
use quill_shared::ApiResponse;
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    published: Option<String>,
}

/// GET /api/posts
///
/// Optional `published` filter; any value other than the literal `"true"`
/// narrows to unpublished posts. Ordering is newest first - part of the
/// contract, enforced by the repository.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let filter = query.published.as_deref().map(|v| v == "true");

    let posts = state.posts.list(filter).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// POST /api/posts - auth required.
///
/// `authorId` is forced to the session's user id; the request body has no
/// field it could arrive in, so ownership is not spoofable.
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Result<Identity, AppError>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let identity = identity.map_err(|e| match e {
        AppError::Unauthorized(_) => {
            AppError::Unauthorized("Please sign in to create a post".to_string())
        }
        other => other,
    })?;

    let req = body.into_inner();

    // Missing required fields surface as the store validator's messages.
    let mut post = Post::new(
        req.title.unwrap_or_default(),
        req.slug.unwrap_or_default(),
        req.content.unwrap_or_default(),
        req.excerpt.unwrap_or_default(),
        req.author.unwrap_or_default(),
        Some(identity.user_id),
    );
    if let Some(cover_image) = req.cover_image {
        post.cover_image = cover_image;
    }
    if let Some(published) = req.published {
        post.published = published;
    }

    let created = state.posts.insert(post).await?;

    tracing::info!(slug = %created.slug, author_id = %identity.user_id, "Post created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(created)))
}

/// GET /api/posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    match state.posts.find_by_slug(&slug).await? {
        Some(post) => Ok(HttpResponse::Ok().json(ApiResponse::ok(post))),
        None => Err(AppError::NotFound),
    }
}

/// Owner-or-admin rule shared by update and delete. `action` names the
/// operation in the 403 message.
fn authorize(post: &Post, identity: &Identity, action: &str) -> Result<(), AppError> {
    if post.is_owned_by(identity.user_id) || identity.is_admin() {
        return Ok(());
    }

    tracing::debug!(
        slug = %post.slug,
        caller = %identity.user_id,
        "Ownership check failed"
    );
    Err(AppError::Forbidden(format!(
        "Not authorized to {} this post",
        action
    )))
}

/// PUT /api/posts/{slug} - auth + ownership required.
///
/// The body is a patch: present fields overwrite, absent fields stay, and
/// the merged record is re-validated before the write. The lookup and the
/// write are separate store round-trips; a concurrent delete in the gap
/// surfaces as 404 from the write.
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let mut post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound)?;

    authorize(&post, &identity, "edit")?;

    let req = body.into_inner();
    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(slug) = req.slug {
        post.slug = slug;
    }
    if let Some(content) = req.content {
        post.content = content;
    }
    if let Some(excerpt) = req.excerpt {
        post.excerpt = excerpt;
    }
    if let Some(author) = req.author {
        post.author = author;
    }
    if let Some(cover_image) = req.cover_image {
        post.cover_image = cover_image;
    }
    if let Some(published) = req.published {
        post.published = published;
    }

    let updated = state.posts.update(post).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated)))
}

/// DELETE /api/posts/{slug} - auth + ownership required. Permanent.
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or(AppError::NotFound)?;

    authorize(&post, &identity, "delete")?;

    state.posts.delete_by_slug(&slug).await?;

    tracing::info!(slug = %slug, caller = %identity.user_id, "Post deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(serde_json::json!({}))))
}

/// Default service for `/api/posts` - undeclared verbs answer 405.
pub async fn collection_method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed {
        method: req.method().to_string(),
        allow: "GET, POST",
    })
}

/// Default service for `/api/posts/{slug}`.
pub async fn item_method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed {
        method: req.method().to_string(),
        allow: "GET, PUT, DELETE",
    })
}
