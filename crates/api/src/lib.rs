//! HTTP API layer for ideaboard.
//!
//! JSON endpoints for posting ideas, voting, commenting and reading
//! aggregate statistics, plus liveness and readiness probes. Built on
//! Axum 0.8; the binary nests [`router`] under `/api`.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;
