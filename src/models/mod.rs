//! Wire models for the remote collection.
//!
//! Field names follow the JSONPlaceholder layout (`userId`, `postId`) on the
//! way in and the crate's own camelCase names on the way out.

mod comment;
mod item;
mod owner;

pub use comment::Comment;
pub use item::Item;
pub use owner::Owner;
