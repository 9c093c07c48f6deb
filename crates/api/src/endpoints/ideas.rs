//! Idea endpoints.

use axum::{Json, Router, extract::State, routing::get};
use ideaboard_common::AppResult;
use ideaboard_core::CreateIdeaInput;

use crate::{
    extractors::ApiJson,
    middleware::AppState,
    response::{CreatedIdea, IdeaSummaryResponse, StatusResponse},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/ideas", get(list_ideas).post(create_idea))
}

/// List all ideas with vote tallies and comment counts, newest first.
async fn list_ideas(State(state): State<AppState>) -> AppResult<Json<Vec<IdeaSummaryResponse>>> {
    let ideas = state.idea_service.list().await?;
    Ok(Json(ideas.into_iter().map(Into::into).collect()))
}

/// Post a new idea.
async fn create_idea(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateIdeaInput>,
) -> AppResult<StatusResponse<CreatedIdea>> {
    let idea = state.idea_service.create(input).await?;
    Ok(StatusResponse::with(CreatedIdea { idea: idea.into() }))
}
