//! Business logic services.

#![allow(missing_docs)]

pub mod comment;
pub mod idea;
pub mod statistics;
pub mod vote;

pub use comment::{CommentService, CreateCommentInput};
pub use idea::{CreateIdeaInput, IdeaService};
pub use statistics::StatisticsService;
pub use vote::{CastVoteInput, VoteService};
