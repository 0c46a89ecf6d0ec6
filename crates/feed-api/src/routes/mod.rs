//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{health, posts, reactions};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(post_routes())
        .merge(reaction_routes())
        .merge(user_routes())
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post))
        .route(
            "/posts/:post_id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/:post_id/views", post(posts::view_post))
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/reactions", get(reactions::get_reactions))
        .route("/posts/:post_id/reactions/like", put(reactions::like_post))
        .route(
            "/posts/:post_id/reactions/dislike",
            put(reactions::dislike_post),
        )
        .route(
            "/posts/:post_id/reactions/@me",
            delete(reactions::remove_own_reaction),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id/posts", get(posts::get_user_posts))
}
