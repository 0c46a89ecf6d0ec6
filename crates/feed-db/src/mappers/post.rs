//! Post entity <-> model mapper

use feed_core::entities::{NewPost, Post};
use feed_core::value_objects::{PostId, UserId};

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            title: model.title,
            text: model.text,
            views: model.views,
            user_id: UserId::new(model.user_id),
        }
    }
}

/// Values of a new post prepared for database insertion
pub struct PostInsert<'a> {
    pub title: &'a str,
    pub text: Option<&'a str>,
    pub user_id: i64,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a NewPost) -> Self {
        Self {
            title: &post.title,
            text: post.text.as_deref(),
            user_id: post.user_id.into_inner(),
        }
    }
}
