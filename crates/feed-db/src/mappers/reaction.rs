//! Reaction entity <-> model mapper

use feed_core::entities::{Polarity, Reaction};
use feed_core::value_objects::{PostId, UserId};

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            user_id: UserId::new(model.user_id),
            post_id: PostId::new(model.post_id),
            polarity: Polarity::from(model.is_like),
        }
    }
}

/// Values of a reaction prepared for database insertion
pub struct ReactionInsert {
    pub user_id: i64,
    pub post_id: i64,
    pub is_like: bool,
}

impl ReactionInsert {
    pub fn new(reaction: &Reaction) -> Self {
        Self {
            user_id: reaction.user_id.into_inner(),
            post_id: reaction.post_id.into_inner(),
            is_like: reaction.is_like(),
        }
    }
}
