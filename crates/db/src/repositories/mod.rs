//! Repository layer over the sea-orm entities.

mod comment;
mod idea;
mod statistics;
mod vote;

pub use comment::CommentRepository;
pub use idea::{IdeaRepository, IdeaWithStats};
pub use statistics::{Statistics, StatisticsRepository};
pub use vote::VoteRepository;

use sea_orm::{DbErr, SqlErr};

/// Whether the store rejected a write because a referenced row is missing.
pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
