//! Reaction handlers
//!
//! Endpoints for liking, disliking and un-reacting to posts.

use axum::{extract::State, Json};
use feed_core::Polarity;
use feed_service::{Envelope, ReactionService, ReactionSummaryResponse};

use crate::extractors::{AuthUser, IdPath, PostPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Like a post
///
/// PUT /posts/{post_id}/reactions/like
pub async fn like_post(
    state: State<AppState>,
    auth: AuthUser,
    path: IdPath<PostPath>,
) -> ApiResult<Json<Envelope<()>>> {
    react(state, auth, path, Polarity::Like).await
}

/// Dislike a post
///
/// PUT /posts/{post_id}/reactions/dislike
pub async fn dislike_post(
    state: State<AppState>,
    auth: AuthUser,
    path: IdPath<PostPath>,
) -> ApiResult<Json<Envelope<()>>> {
    react(state, auth, path, Polarity::Dislike).await
}

async fn react(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostPath>,
    polarity: Polarity,
) -> ApiResult<Json<Envelope<()>>> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let reply = service.react(post_id, auth.user_id, polarity).await?;
    Ok(Json(reply.into()))
}

/// Remove own reaction
///
/// DELETE /posts/{post_id}/reactions/@me
pub async fn remove_own_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<PostPath>,
) -> ApiResult<Json<Envelope<()>>> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let reply = service.remove_reaction(post_id, auth.user_id).await?;
    Ok(Json(reply.into()))
}

/// Reaction counts of a post
///
/// GET /posts/{post_id}/reactions
pub async fn get_reactions(
    State(state): State<AppState>,
    IdPath(path): IdPath<PostPath>,
) -> ApiResult<Json<Envelope<ReactionSummaryResponse>>> {
    let post_id = path.post_id()?;

    let service = ReactionService::new(state.service_context());
    let reply = service.get_summary(post_id).await?;
    Ok(Json(reply.into()))
}
