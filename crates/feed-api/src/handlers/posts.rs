//! Post handlers
//!
//! Endpoints for publishing, reading, editing, deleting and viewing posts.

use axum::{extract::State, Json};
use feed_service::{
    CreatePostRequest, Envelope, PostResponse, PostService, UpdatePostRequest,
};

use crate::extractors::{AuthUser, IdPath, PostPath, UserPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Publish a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<Envelope<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let reply = service.create_post(auth.user_id, request).await?;
    Ok(Created(Json(reply.into())))
}

/// Get a post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(path): IdPath<PostPath>,
) -> ApiResult<Json<Envelope<PostResponse>>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let reply = service.get_post(post_id).await?;
    Ok(Json(reply.into()))
}

/// Edit a post
///
/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostPath>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<Envelope<PostResponse>>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let reply = service.edit_post(post_id, auth.user_id, request).await?;
    Ok(Json(reply.into()))
}

/// Delete a post and its reactions
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostPath>,
) -> ApiResult<Json<Envelope<()>>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let reply = service.delete_post(post_id, auth.user_id).await?;
    Ok(Json(reply.into()))
}

/// Count a view
///
/// POST /posts/{post_id}/views
pub async fn view_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostPath>,
) -> ApiResult<Json<Envelope<PostResponse>>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let reply = service.view_post(post_id, auth.user_id).await?;
    Ok(Json(reply.into()))
}

/// List a user's posts
///
/// GET /users/{user_id}/posts
pub async fn get_user_posts(
    State(state): State<AppState>,
    IdPath(path): IdPath<UserPath>,
) -> ApiResult<Json<Envelope<PostResponse>>> {
    let user_id = path.user_id()?;

    let service = PostService::new(state.service_context());
    let reply = service.list_user_posts(user_id).await?;
    Ok(Json(reply.into()))
}
