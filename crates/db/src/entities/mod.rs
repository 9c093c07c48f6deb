//! Database entities.

#![allow(missing_docs)]

pub mod comment;
pub mod idea;
pub mod vote;

pub use comment::Entity as Comment;
pub use idea::Entity as Idea;
pub use vote::Entity as Vote;
