//! API response types.

#![allow(missing_docs)]

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use ideaboard_db::{
    entities::{comment, idea},
    repositories::{IdeaWithStats, Statistics},
};
use serde::Serialize;

/// `{"status": "ok", ...payload}` acknowledgement for writes.
#[derive(Debug, Serialize)]
pub struct StatusResponse<T: Serialize = ()> {
    pub status: &'static str,
    #[serde(flatten)]
    pub payload: Option<T>,
}

impl StatusResponse {
    /// Bare acknowledgement with no payload.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            status: "ok",
            payload: None,
        }
    }
}

impl<T: Serialize> StatusResponse<T> {
    pub const fn with(payload: T) -> Self {
        Self {
            status: "ok",
            payload: Some(payload),
        }
    }
}

impl<T: Serialize> IntoResponse for StatusResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// An idea as stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaResponse {
    pub id: i32,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl From<idea::Model> for IdeaResponse {
    fn from(idea: idea::Model) -> Self {
        Self {
            id: idea.id,
            author: idea.author,
            title: idea.title,
            content: idea.content,
            created_at: idea.created_at.to_rfc3339(),
        }
    }
}

/// An idea in the listing, with its tallies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaSummaryResponse {
    #[serde(flatten)]
    pub idea: IdeaResponse,
    pub upvotes: i64,
    pub downvotes: i64,
    pub score: i64,
    pub comments_count: i64,
}

impl From<IdeaWithStats> for IdeaSummaryResponse {
    fn from(row: IdeaWithStats) -> Self {
        let score = row.score();
        Self {
            idea: IdeaResponse {
                id: row.id,
                author: row.author,
                title: row.title,
                content: row.content,
                created_at: row.created_at.to_rfc3339(),
            },
            upvotes: row.upvotes,
            downvotes: row.downvotes,
            score,
            comments_count: row.comments_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedIdea {
    pub idea: IdeaResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i32,
    pub idea_id: i32,
    pub author: String,
    pub text: String,
    pub created_at: String,
}

impl From<comment::Model> for CommentResponse {
    fn from(comment: comment::Model) -> Self {
        Self {
            id: comment.id,
            idea_id: comment.idea_id,
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedComment {
    pub comment: CommentResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub total_ideas: i64,
    pub total_comments: i64,
    pub total_votes: i64,
}

impl From<Statistics> for StatisticsResponse {
    fn from(stats: Statistics) -> Self {
        Self {
            total_ideas: stats.total_ideas,
            total_comments: stats.total_comments,
            total_votes: stats.total_votes,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_status() {
        let body = serde_json::to_value(StatusResponse::ok()).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[test]
    fn test_status_with_payload_is_flattened() {
        let body = serde_json::to_value(StatusResponse::with(StatisticsResponse {
            total_ideas: 1,
            total_comments: 0,
            total_votes: 2,
        }))
        .unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["totalIdeas"], 1);
        assert_eq!(body["totalVotes"], 2);
    }
}
