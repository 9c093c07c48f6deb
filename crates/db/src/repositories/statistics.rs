//! Store-wide totals.

use std::sync::Arc;

use ideaboard_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use serde::Serialize;

/// Independent scalar counts, so an empty table yields 0 rather than no row.
const TOTALS_SQL: &str = r"
    SELECT
        (SELECT COUNT(*) FROM ideas) AS total_ideas,
        (SELECT COUNT(*) FROM comments) AS total_comments,
        (SELECT COUNT(*) FROM votes) AS total_votes
";

/// Row counts across the whole store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct Statistics {
    /// Rows in `ideas`.
    pub total_ideas: i64,
    /// Rows in `comments`.
    pub total_comments: i64,
    /// Rows in `votes`, one per (idea, voter).
    pub total_votes: i64,
}

/// Repository for store-wide aggregates.
#[derive(Clone)]
pub struct StatisticsRepository {
    db: Arc<DatabaseConnection>,
}

impl StatisticsRepository {
    /// Create a new statistics repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Count ideas, comments and votes in a single round trip.
    pub async fn totals(&self) -> AppResult<Statistics> {
        let row = Statistics::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            TOTALS_SQL,
        ))
        .one(self.db.as_ref())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.unwrap_or_default())
    }
}
