//! Post resource handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Author, NewPost, PostId, PostPatch, PostView, serialize};
use blog_core::{DomainError, RepoError};
use blog_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: &PostId) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id: id.to_string(),
    }
    .into()
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostView> = posts.iter().map(serialize).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(HttpResponse::Ok().json(serialize(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let author = req
        .author
        .map(|a| Author {
            first_name: a.first_name,
            last_name: a.last_name,
        })
        .unwrap_or_default();
    let new_post = NewPost::new(req.title, req.content, author, req.created)?;

    let post = state.posts.insert(new_post).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(serialize(&post)))
}

/// PUT /posts/{id}
///
/// Only the fields present in the body are written. Responds 204 without a
/// body; callers re-fetch to see the result.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let path_id = path.into_inner();
    let req = body.into_inner();

    if req.id.as_deref() != Some(path_id.as_str()) {
        let message = format!(
            "Request path id ({}) and request body id ({}) must match",
            path_id,
            req.id.as_deref().unwrap_or("missing")
        );
        tracing::warn!("{}", message);
        return Err(AppError::BadRequest(message));
    }

    let id = PostId::new(path_id);
    let author = req.author.unwrap_or_default();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        first_name: author.first_name,
        last_name: author.last_name,
    };

    match state.posts.update(&id, patch).await {
        Ok(()) => {
            tracing::info!(post_id = %id, "Post updated");
            Ok(HttpResponse::NoContent().finish())
        }
        Err(RepoError::NotFound) => Err(not_found(&id)),
        Err(e) => Err(e.into()),
    }
}

/// DELETE /posts/{id}
///
/// Deleting an id that does not exist still succeeds.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let removed = state.posts.delete(&id).await?;
    tracing::info!(post_id = %id, removed, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
