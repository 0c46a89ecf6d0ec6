//! Domain entities - core business objects

mod post;
mod reaction;

pub use post::{validate_title, NewPost, Post};
pub use reaction::{
    Polarity, Reaction, ReactionEvent, ReactionState, ReactionSummary, ReactionTransition,
};
