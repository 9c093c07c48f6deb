//! Vote endpoint.

use axum::{Router, extract::State, routing::post};
use ideaboard_common::AppResult;
use ideaboard_core::CastVoteInput;

use crate::{extractors::ApiJson, middleware::AppState, response::StatusResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/vote", post(cast_vote))
}

/// Cast or change a vote. A voter holds at most one vote per idea.
async fn cast_vote(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CastVoteInput>,
) -> AppResult<StatusResponse> {
    state.vote_service.cast(input).await?;
    Ok(StatusResponse::ok())
}
