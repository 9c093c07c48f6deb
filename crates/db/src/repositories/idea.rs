//! Idea repository.

use std::sync::Arc;

use crate::entities::{Idea, idea};
use ideaboard_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, Statement,
    prelude::DateTimeWithTimeZone,
};
use serde::Serialize;

/// Each aggregate is its own correlated subquery, so the comment count is
/// never multiplied by the number of votes (and vice versa).
const LIST_WITH_STATS_SQL: &str = r"
    SELECT
        i.id,
        i.author,
        i.title,
        i.content,
        i.created_at,
        (SELECT COUNT(*) FROM votes v WHERE v.idea_id = i.id AND v.vote_type = 'up') AS upvotes,
        (SELECT COUNT(*) FROM votes v WHERE v.idea_id = i.id AND v.vote_type = 'down') AS downvotes,
        (SELECT COUNT(*) FROM comments c WHERE c.idea_id = i.id) AS comments_count
    FROM ideas i
    ORDER BY i.created_at DESC, i.id DESC
";

/// An idea together with its derived vote tallies and comment count.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
#[allow(missing_docs)]
pub struct IdeaWithStats {
    pub id: i32,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    /// Votes with direction `up`.
    pub upvotes: i64,
    /// Votes with direction `down`.
    pub downvotes: i64,
    pub comments_count: i64,
}

impl IdeaWithStats {
    /// Upvotes minus downvotes.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// Idea repository for database operations.
#[derive(Clone)]
pub struct IdeaRepository {
    db: Arc<DatabaseConnection>,
}

impl IdeaRepository {
    /// Create a new idea repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an idea by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<idea::Model>> {
        Idea::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Check whether an idea exists.
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Create a new idea.
    pub async fn create(&self, model: idea::ActiveModel) -> AppResult<idea::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List every idea with upvotes, downvotes and comment count, newest first.
    pub async fn list_with_stats(&self) -> AppResult<Vec<IdeaWithStats>> {
        IdeaWithStats::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            LIST_WITH_STATS_SQL,
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }
}
