//! Vote repository.

use std::sync::Arc;

use crate::entities::{
    Vote,
    vote::{self, VoteType},
};
use crate::repositories::is_foreign_key_violation;
use ideaboard_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, EntityTrait, Set, sea_query::OnConflict};

/// Vote repository for database operations.
#[derive(Clone)]
pub struct VoteRepository {
    db: Arc<DatabaseConnection>,
}

impl VoteRepository {
    /// Create a new vote repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Insert a vote, or overwrite the direction of the voter's existing vote.
    ///
    /// Issued as one `INSERT ... ON CONFLICT (idea_id, username) DO UPDATE`
    /// statement keyed on the unique index, so two concurrent votes from the
    /// same voter can never leave two rows behind.
    pub async fn upsert(
        &self,
        idea_id: i32,
        username: &str,
        vote_type: VoteType,
    ) -> AppResult<vote::Model> {
        let model = vote::ActiveModel {
            idea_id: Set(idea_id),
            username: Set(username.to_string()),
            vote_type: Set(vote_type),
            ..Default::default()
        };

        Vote::insert(model)
            .on_conflict(
                OnConflict::columns([vote::Column::IdeaId, vote::Column::Username])
                    .update_column(vote::Column::VoteType)
                    .to_owned(),
            )
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::IdeaNotFound(idea_id)
                } else {
                    AppError::Database(e.to_string())
                }
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn create_test_vote(id: i32, idea_id: i32, username: &str, vote_type: VoteType) -> vote::Model {
        vote::Model {
            id,
            idea_id,
            username: username.to_string(),
            vote_type,
        }
    }

    #[tokio::test]
    async fn test_upsert_is_single_conflict_statement() {
        let stored = create_test_vote(1, 3, "bob", VoteType::Down);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[stored.clone()]])
                .into_connection(),
        );

        let repo = VoteRepository::new(db.clone());
        let result = repo.upsert(3, "bob", VoteType::Down).await.unwrap();
        assert_eq!(result, stored);

        drop(repo);
        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("ON CONFLICT"));
        assert!(sql.contains("DO UPDATE SET"));
        assert!(sql.contains("excluded"));
        assert!(sql.contains("RETURNING"));
    }

    #[tokio::test]
    async fn test_upsert_store_failure_is_database_error() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([DbErr::Custom("connection reset".to_string())])
                .into_connection(),
        );

        let repo = VoteRepository::new(db);
        let result = repo.upsert(3, "bob", VoteType::Up).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[test]
    fn test_vote_type_wire_format() {
        assert_eq!(serde_json::to_string(&VoteType::Up).unwrap(), r#""up""#);
        assert_eq!(
            serde_json::from_str::<VoteType>(r#""down""#).unwrap(),
            VoteType::Down
        );
        assert!(serde_json::from_str::<VoteType>(r#""sideways""#).is_err());
        assert_eq!(VoteType::Down.as_str(), "down");
    }
}
