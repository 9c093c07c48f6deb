//! API endpoints.

#![allow(missing_docs)]

mod comments;
mod health;
mod ideas;
mod statistics;
mod vote;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(ideas::router())
        .merge(vote::router())
        .merge(comments::router())
        .merge(statistics::router())
        .merge(health::router())
}
