//! Comment endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use ideaboard_common::{AppError, AppResult};
use ideaboard_core::CreateCommentInput;

use crate::{
    extractors::ApiJson,
    middleware::AppState,
    response::{CommentResponse, CreatedComment, StatusResponse},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", post(create_comment))
        .route("/comments/{idea_id}", get(list_comments))
}

async fn create_comment(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCommentInput>,
) -> AppResult<StatusResponse<CreatedComment>> {
    let comment = state.comment_service.create(input).await?;
    Ok(StatusResponse::with(CreatedComment {
        comment: comment.into(),
    }))
}

/// Comments on an idea, oldest first.
async fn list_comments(
    State(state): State<AppState>,
    Path(idea_id): Path<String>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    let idea_id = parse_idea_id(&idea_id)?;
    let comments = state.comment_service.list_for_idea(idea_id).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

fn parse_idea_id(raw: &str) -> AppResult<i32> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("ideaId must be an integer, got {raw:?}")))
}
