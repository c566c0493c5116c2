//! HTTP request handlers for the mock server.

pub mod projects;
pub mod shared;
pub mod user;

pub use projects::*;
pub use shared::*;
pub use user::*;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::state::MockState;

pub type SharedState = Arc<RwLock<MockState>>;

/// Acknowledgement body for write endpoints.
pub const ACK: &str = "success";

/// Error body in the shape the client extracts messages from.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "message": message.into() })),
    )
        .into_response()
}

pub fn not_found(what: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("{what} not found"))
}

pub fn unauthorized() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "invalid session")
}
