//! Reaction entity - a user's like or dislike on a post
//!
//! A user holds at most one reaction per post. The transitions between
//! "no reaction", "liked" and "disliked" are modelled by [`ReactionState`],
//! which decides what has to be written without touching storage.

use std::fmt;

use crate::value_objects::{PostId, UserId};

/// Polarity of a reaction. Stored as a boolean, `true` meaning like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Like,
    Dislike,
}

impl Polarity {
    #[inline]
    pub fn is_like(self) -> bool {
        matches!(self, Self::Like)
    }

    /// Past-tense verb used in outcome messages ("liked", "disliked")
    pub fn verb(self) -> &'static str {
        match self {
            Self::Like => "liked",
            Self::Dislike => "disliked",
        }
    }

    /// Noun used in outcome messages ("like", "dislike")
    pub fn noun(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl From<bool> for Polarity {
    fn from(is_like: bool) -> Self {
        if is_like {
            Self::Like
        } else {
            Self::Dislike
        }
    }
}

impl From<Polarity> for bool {
    fn from(polarity: Polarity) -> Self {
        polarity.is_like()
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Reaction entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: UserId,
    pub post_id: PostId,
    pub polarity: Polarity,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: UserId, post_id: PostId, polarity: Polarity) -> Self {
        Self {
            user_id,
            post_id,
            polarity,
        }
    }

    #[inline]
    pub fn is_like(&self) -> bool {
        self.polarity.is_like()
    }
}

/// What a user asks to do with their reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionEvent {
    React(Polarity),
    Remove,
}

/// Current reaction of one user on one post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReactionState {
    #[default]
    None,
    Liked,
    Disliked,
}

/// Storage effect decided by a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTransition {
    /// No row yet: insert one with the given polarity
    Insert(Polarity),
    /// Row exists with the opposite polarity: overwrite it
    Flip { from: Polarity, to: Polarity },
    /// Row already has the requested polarity
    Unchanged(Polarity),
    /// Row exists and must be deleted
    Delete,
    /// Removal requested but there is nothing to remove
    RejectRemove,
}

impl ReactionState {
    /// Derive the state from the currently stored row, if any
    pub fn of(current: Option<&Reaction>) -> Self {
        match current.map(|r| r.polarity) {
            None => Self::None,
            Some(Polarity::Like) => Self::Liked,
            Some(Polarity::Dislike) => Self::Disliked,
        }
    }

    /// Stored polarity for this state
    pub fn polarity(self) -> Option<Polarity> {
        match self {
            Self::None => None,
            Self::Liked => Some(Polarity::Like),
            Self::Disliked => Some(Polarity::Dislike),
        }
    }

    /// Decide the storage effect of `event` from this state
    pub fn on(self, event: ReactionEvent) -> ReactionTransition {
        match (self.polarity(), event) {
            (None, ReactionEvent::React(wanted)) => ReactionTransition::Insert(wanted),
            (Some(held), ReactionEvent::React(wanted)) if held == wanted => {
                ReactionTransition::Unchanged(held)
            }
            (Some(held), ReactionEvent::React(wanted)) => ReactionTransition::Flip {
                from: held,
                to: wanted,
            },
            (Some(_), ReactionEvent::Remove) => ReactionTransition::Delete,
            (None, ReactionEvent::Remove) => ReactionTransition::RejectRemove,
        }
    }
}

/// Reaction counts of a post, derived from its reactions on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionSummary {
    pub total_reactions: u64,
    pub likes: u64,
    pub dislikes: u64,
}

impl ReactionSummary {
    /// Count likes and dislikes over a set of reactions
    pub fn from_reactions<'a, I>(reactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Reaction>,
    {
        reactions
            .into_iter()
            .fold(Self::default(), |mut summary, reaction| {
                summary.total_reactions += 1;
                if reaction.is_like() {
                    summary.likes += 1;
                } else {
                    summary.dislikes += 1;
                }
                summary
            })
    }
}
