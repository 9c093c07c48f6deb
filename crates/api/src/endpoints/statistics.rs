//! Statistics endpoint.

use axum::{Json, Router, extract::State, routing::get};
use ideaboard_common::AppResult;

use crate::{middleware::AppState, response::StatisticsResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/statistics", get(get_statistics))
}

/// Total ideas, comments and votes.
async fn get_statistics(State(state): State<AppState>) -> AppResult<Json<StatisticsResponse>> {
    let stats = state.statistics_service.get().await?;
    Ok(Json(stats.into()))
}
