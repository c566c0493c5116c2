//! Shared collection endpoint handlers.
//!
//! Every handler takes the collection kind it was routed for; the router
//! registers one route per kind.

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{not_found, unauthorized, SharedState, ACK};
use crate::models::{
    CommentRequest, RemoveCommentRequest, SharedActionRequest, SharedFileRequest,
    SharedIdRequest,
};
use crate::{CollectionKind, RowWindow, SortMode};

/// Query parameters of an upload.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub session_id: String,
    pub login_id: String,
    pub file_name: String,
}

/// POST req{Sort}Shared{Kinds}.do
pub async fn list_shared(
    kind: CollectionKind,
    sort: SortMode,
    State(state): State<SharedState>,
    Json(window): Json<RowWindow>,
) -> Response {
    let state = state.read().await;
    // Listing endpoints ignore any tag in the body.
    let window = RowWindow::new(window.row_unit, window.row_start);
    Json(state.list(kind, sort, &window)).into_response()
}

/// POST reqTagSearchShared{Kinds}.do
pub async fn search_shared(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(window): Json<RowWindow>,
) -> Response {
    let state = state.read().await;
    Json(state.list(kind, SortMode::Recent, &window)).into_response()
}

/// POST reqShared{Kind}Detail.do
pub async fn shared_details(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<SharedIdRequest>,
) -> Response {
    let state = state.read().await;
    match state.details(kind, request.shared_id) {
        Some(details) => Json(details).into_response(),
        None => not_found("shared item"),
    }
}

/// POST reqShared{Kind}CommentsList.do
pub async fn shared_comments(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<SharedIdRequest>,
) -> Response {
    let state = state.read().await;
    let comments = state
        .comments
        .get(&(kind, request.shared_id))
        .cloned()
        .unwrap_or_default();
    Json(comments).into_response()
}

/// POST reqShared{Kind}Tags.do
pub async fn shared_tags(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<SharedIdRequest>,
) -> Response {
    let state = state.read().await;
    let tags = state
        .tags
        .get(&(kind, request.shared_id))
        .cloned()
        .unwrap_or_default();
    Json(tags).into_response()
}

/// POST reqAllTags.do
pub async fn all_tags(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    Json(state.all_tags()).into_response()
}

/// POST downloadShared{Kind}File.do
pub async fn shared_file(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<SharedFileRequest>,
) -> Response {
    let state = state.read().await;
    match state
        .files
        .get(&(kind, request.shared_id, request.file_name))
    {
        Some(bytes) => bytes.clone().into_response(),
        None => not_found("file"),
    }
}

/// POST reqInsertShared{Kind}Comment.do
pub async fn add_comment(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<CommentRequest>,
) -> Response {
    let mut state = state.write().await;
    let Some(user) = state
        .user_for(&request.session.session_id, &request.session.login_id)
        .cloned()
    else {
        return unauthorized();
    };
    match state.add_comment(kind, request.shared_id, &user, &request.comment) {
        Some(_) => ACK.into_response(),
        None => not_found("shared item"),
    }
}

/// POST reqDeleteShared{Kind}Comment.do
pub async fn remove_comment(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<RemoveCommentRequest>,
) -> Response {
    let mut state = state.write().await;
    let Some(user) = state
        .user_for(&request.session.session_id, &request.session.login_id)
        .cloned()
    else {
        return unauthorized();
    };
    if state.remove_comment(kind, request.shared_id, request.comment_id, &user) {
        ACK.into_response()
    } else {
        not_found("comment")
    }
}

/// POST reqInsertShared{Kind}Like.do
pub async fn like(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<SharedActionRequest>,
) -> Response {
    let mut state = state.write().await;
    if state
        .user_for(&request.session.session_id, &request.session.login_id)
        .is_none()
    {
        return unauthorized();
    }
    if state.like(kind, request.shared_id, &request.session.login_id) {
        ACK.into_response()
    } else {
        not_found("shared item")
    }
}

/// POST reqShared{Kind}DownCntAdd.do
pub async fn add_download(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<SharedIdRequest>,
) -> Response {
    let mut state = state.write().await;
    if state.add_download(kind, request.shared_id) {
        ACK.into_response()
    } else {
        not_found("shared item")
    }
}

/// POST uploadShare{Kind}File.do
///
/// Responds with the id of the new shared item.
pub async fn upload(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Response {
    let mut state = state.write().await;
    let Some(user) = state
        .user_for(&query.session_id, &query.login_id)
        .cloned()
    else {
        return unauthorized();
    };
    let shared_id = state.upload(kind, &user, &query.file_name, body.to_vec());
    shared_id.to_string().into_response()
}

/// POST reqDeleteShared{Kind}.do
pub async fn remove_shared(
    kind: CollectionKind,
    State(state): State<SharedState>,
    Json(request): Json<SharedActionRequest>,
) -> Response {
    let mut state = state.write().await;
    let Some(user) = state
        .user_for(&request.session.session_id, &request.session.login_id)
        .cloned()
    else {
        return unauthorized();
    };
    if state.remove_item(kind, request.shared_id, &user) {
        ACK.into_response()
    } else {
        not_found("shared item")
    }
}
