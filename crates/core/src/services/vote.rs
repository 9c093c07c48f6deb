//! Vote service.

use ideaboard_common::{AppError, AppResult};
use ideaboard_db::{
    entities::vote::{self, VoteType},
    repositories::{IdeaRepository, VoteRepository},
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

/// Input for casting a vote.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteInput {
    #[validate(range(min = 1))]
    pub idea_id: i32,

    #[validate(length(min = 1, max = 100))]
    pub username: String,

    pub vote_type: VoteType,
}

impl CastVoteInput {
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            ..self
        }
    }
}

#[derive(Clone)]
pub struct VoteService {
    vote_repo: VoteRepository,
    idea_repo: IdeaRepository,
}

impl VoteService {
    #[must_use]
    pub const fn new(vote_repo: VoteRepository, idea_repo: IdeaRepository) -> Self {
        Self {
            vote_repo,
            idea_repo,
        }
    }

    /// Record a voter's direction on an idea, replacing any earlier vote.
    pub async fn cast(&self, input: CastVoteInput) -> AppResult<vote::Model> {
        let input = input.trimmed();
        input.validate()?;

        if !self.idea_repo.exists(input.idea_id).await? {
            return Err(AppError::IdeaNotFound(input.idea_id));
        }

        // The idea may vanish between the check and the upsert; the
        // repository maps that foreign-key failure to the same error.
        let vote = self
            .vote_repo
            .upsert(input.idea_id, &input.username, input.vote_type)
            .await?;

        info!(
            idea_id = vote.idea_id,
            username = %vote.username,
            vote_type = vote.vote_type.as_str(),
            "Vote recorded"
        );
        Ok(vote)
    }
}
