//! Shared application state.

use std::sync::Arc;

use ideaboard_core::{CommentService, IdeaService, StatisticsService, VoteService};
use ideaboard_db::repositories::{
    CommentRepository, IdeaRepository, StatisticsRepository, VoteRepository,
};
use sea_orm::DatabaseConnection;

/// Application state.
#[derive(Clone)]
#[allow(missing_docs)]
pub struct AppState {
    pub idea_service: IdeaService,
    pub vote_service: VoteService,
    pub comment_service: CommentService,
    pub statistics_service: StatisticsService,
}

impl AppState {
    /// Wire repositories and services over one shared pool.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let idea_repo = IdeaRepository::new(Arc::clone(&db));
        let vote_repo = VoteRepository::new(Arc::clone(&db));
        let comment_repo = CommentRepository::new(Arc::clone(&db));
        let statistics_repo = StatisticsRepository::new(db);

        Self {
            idea_service: IdeaService::new(idea_repo.clone()),
            vote_service: VoteService::new(vote_repo, idea_repo),
            comment_service: CommentService::new(comment_repo),
            statistics_service: StatisticsService::new(statistics_repo),
        }
    }
}
