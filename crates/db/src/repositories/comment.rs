//! Comment repository.

use std::sync::Arc;

use crate::entities::{Comment, comment};
use crate::repositories::is_foreign_key_violation;
use ideaboard_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

/// Comment repository for database operations.
#[derive(Clone)]
pub struct CommentRepository {
    db: Arc<DatabaseConnection>,
}

impl CommentRepository {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Create a new comment.
    ///
    /// A comment referencing a missing idea is rejected by the foreign key
    /// and surfaces as a validation error.
    pub async fn create(&self, model: comment::ActiveModel) -> AppResult<comment::Model> {
        let idea_id = model.idea_id.clone().take();

        model.insert(self.db.as_ref()).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::Validation(format!(
                    "ideaId {} does not reference an existing idea",
                    idea_id.unwrap_or_default()
                ))
            } else {
                AppError::Database(e.to_string())
            }
        })
    }

    /// Get the comments on an idea, oldest first.
    pub async fn find_by_idea(&self, idea_id: i32) -> AppResult<Vec<comment::Model>> {
        Comment::find()
            .filter(comment::Column::IdeaId.eq(idea_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
