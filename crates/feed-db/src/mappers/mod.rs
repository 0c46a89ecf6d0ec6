//! Entity to model mappers
//!
//! Conversions between domain entities (feed-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod post;
mod reaction;

pub use post::PostInsert;
pub use reaction::ReactionInsert;
