//! Idea service.

use chrono::Utc;
use ideaboard_common::AppResult;
use ideaboard_db::{
    entities::idea,
    repositories::{IdeaRepository, IdeaWithStats},
};
use sea_orm::Set;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

/// Input for posting an idea.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIdeaInput {
    #[validate(length(min = 1, max = 100))]
    pub author: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,
}

impl CreateIdeaInput {
    /// Strip surrounding whitespace so a blank field fails the length check.
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            author: self.author.trim().to_string(),
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}

#[derive(Clone)]
pub struct IdeaService {
    idea_repo: IdeaRepository,
}

impl IdeaService {
    #[must_use]
    pub const fn new(idea_repo: IdeaRepository) -> Self {
        Self { idea_repo }
    }

    /// All ideas with their tallies, newest first.
    pub async fn list(&self) -> AppResult<Vec<IdeaWithStats>> {
        self.idea_repo.list_with_stats().await
    }

    /// Post a new idea.
    pub async fn create(&self, input: CreateIdeaInput) -> AppResult<idea::Model> {
        let input = input.trimmed();
        input.validate()?;

        let model = idea::ActiveModel {
            author: Set(input.author),
            title: Set(input.title),
            content: Set(input.content),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let idea = self.idea_repo.create(model).await?;
        info!(idea_id = idea.id, author = %idea.author, "Idea created");
        Ok(idea)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ideaboard_common::AppError;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn input(author: &str, title: &str, content: &str) -> CreateIdeaInput {
        CreateIdeaInput {
            author: author.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_idea() {
        let stored = idea::Model {
            id: 1,
            author: "Alice".to_string(),
            title: "Better docs".to_string(),
            content: "We need more examples".to_string(),
            created_at: Utc::now().into(),
        };
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[stored.clone()]])
                .into_connection(),
        );
        let service = IdeaService::new(IdeaRepository::new(db));

        let result = service
            .create(input("  Alice ", "Better docs", "We need more examples"))
            .await
            .unwrap();

        assert_eq!(result, stored);
    }

    #[tokio::test]
    async fn test_create_idea_blank_title() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = IdeaService::new(IdeaRepository::new(db));

        let result = service.create(input("Alice", "   ", "body")).await;

        match result {
            Err(AppError::InvalidFields(fields)) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "title");
            }
            other => panic!("expected InvalidFields, got {other:?}"),
        }
    }

    #[test]
    fn test_title_too_long() {
        let long = input("Alice", &"x".repeat(256), "body");
        assert!(long.validate().is_err());

        let ok = input("Alice", &"x".repeat(255), "body");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let result = serde_json::from_str::<CreateIdeaInput>(r#"{"author":"Alice","title":"t"}"#);
        assert!(result.is_err());
    }
}
