//! Exported project and version handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use super::{not_found, SharedState};
use crate::models::{ExportFileRequest, UrlIdRequest};

/// GET min_sketchware_version.txt
pub async fn min_version(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    state.min_version.to_string().into_response()
}

/// POST reqGetExportData.do
///
/// The service wraps the single export in a list.
pub async fn exported_project(
    State(state): State<SharedState>,
    Json(request): Json<UrlIdRequest>,
) -> Response {
    let state = state.read().await;
    let projects: Vec<_> = state.exports.get(&request.url_id).cloned().into_iter().collect();
    Json(projects).into_response()
}

/// POST getExportProjectFile.do
pub async fn exported_project_file(
    State(state): State<SharedState>,
    Json(request): Json<ExportFileRequest>,
) -> Response {
    let state = state.read().await;
    let owned = state
        .exports
        .get(&request.url_id)
        .is_some_and(|p| p.user_id == request.user_id);
    match state.export_files.get(&(request.url_id, request.file_name)) {
        Some(bytes) if owned => bytes.clone().into_response(),
        _ => not_found("export file"),
    }
}
