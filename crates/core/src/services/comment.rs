//! Comment service.

use chrono::Utc;
use ideaboard_common::AppResult;
use ideaboard_db::{entities::comment, repositories::CommentRepository};
use sea_orm::Set;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

/// Input for commenting on an idea.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentInput {
    #[validate(range(min = 1))]
    pub idea_id: i32,

    #[validate(length(min = 1, max = 100))]
    pub author: String,

    #[validate(length(min = 1))]
    pub text: String,
}

impl CreateCommentInput {
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            idea_id: self.idea_id,
            author: self.author.trim().to_string(),
            text: self.text.trim().to_string(),
        }
    }
}

#[derive(Clone)]
pub struct CommentService {
    comment_repo: CommentRepository,
}

impl CommentService {
    #[must_use]
    pub const fn new(comment_repo: CommentRepository) -> Self {
        Self { comment_repo }
    }

    /// Attach a comment to an idea.
    pub async fn create(&self, input: CreateCommentInput) -> AppResult<comment::Model> {
        let input = input.trimmed();
        input.validate()?;

        let model = comment::ActiveModel {
            idea_id: Set(input.idea_id),
            author: Set(input.author),
            text: Set(input.text),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let comment = self.comment_repo.create(model).await?;
        info!(comment_id = comment.id, idea_id = comment.idea_id, "Comment created");
        Ok(comment)
    }

    /// Comments on an idea, oldest first. Unknown ideas yield an empty list.
    pub async fn list_for_idea(&self, idea_id: i32) -> AppResult<Vec<comment::Model>> {
        self.comment_repo.find_by_idea(idea_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ideaboard_common::AppError;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn test_comment(id: i32, text: &str) -> comment::Model {
        comment::Model {
            id,
            idea_id: 1,
            author: "eve".to_string(),
            text: text.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_comment() {
        let stored = test_comment(1, "Agreed!");
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[stored.clone()]])
                .into_connection(),
        );
        let service = CommentService::new(CommentRepository::new(db));

        let result = service
            .create(CreateCommentInput {
                idea_id: 1,
                author: "eve".to_string(),
                text: "Agreed!\n".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result, stored);
    }

    #[tokio::test]
    async fn test_create_comment_empty_text() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = CommentService::new(CommentRepository::new(db));

        let result = service
            .create(CreateCommentInput {
                idea_id: 1,
                author: "eve".to_string(),
                text: " ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::InvalidFields(_))));
    }

    #[tokio::test]
    async fn test_list_for_idea() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_comment(1, "first"), test_comment(2, "second")]])
                .into_connection(),
        );
        let service = CommentService::new(CommentRepository::new(db));

        let comments = service.list_for_idea(1).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "first");
    }
}
