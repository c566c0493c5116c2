//! User and export management handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use super::{not_found, unauthorized, SharedState, ACK};
use crate::mock_server::state::MockState;
use crate::models::{AuthorizeRequest, ExportActionRequest};
use crate::Session;

/// POST registerSnsUser.do
pub async fn authorize(
    State(state): State<SharedState>,
    Json(request): Json<AuthorizeRequest>,
) -> Response {
    let mut state = state.write().await;
    Json(state.authorize(&request)).into_response()
}

/// POST reqListExportApk.do
pub async fn exported_apks(
    State(state): State<SharedState>,
    Json(session): Json<Session>,
) -> Response {
    let state = state.read().await;
    match state.user_for(&session.session_id, &session.login_id) {
        Some(user) => {
            Json(MockState::exports_of(&state.exported_apks, user.user_id)).into_response()
        }
        None => unauthorized(),
    }
}

/// POST reqListExportData.do
pub async fn exported_projects(
    State(state): State<SharedState>,
    Json(session): Json<Session>,
) -> Response {
    let state = state.read().await;
    match state.user_for(&session.session_id, &session.login_id) {
        Some(user) => {
            Json(MockState::exports_of(&state.exported_projects, user.user_id)).into_response()
        }
        None => unauthorized(),
    }
}

/// POST reqDeleteApkUrl.do
pub async fn remove_exported_apk(
    State(state): State<SharedState>,
    Json(request): Json<ExportActionRequest>,
) -> Response {
    let mut state = state.write().await;
    let Some(user_id) = state
        .user_for(&request.session.session_id, &request.session.login_id)
        .map(|u| u.user_id)
    else {
        return unauthorized();
    };
    let before = state.exported_apks.len();
    state
        .exported_apks
        .retain(|a| !(a.url_id == request.url_id && a.user_id == user_id));
    if state.exported_apks.len() < before {
        ACK.into_response()
    } else {
        not_found("export")
    }
}

/// POST reqDeleteDataUrl.do
pub async fn remove_exported_project(
    State(state): State<SharedState>,
    Json(request): Json<ExportActionRequest>,
) -> Response {
    let mut state = state.write().await;
    let Some(user_id) = state
        .user_for(&request.session.session_id, &request.session.login_id)
        .map(|u| u.user_id)
    else {
        return unauthorized();
    };
    let before = state.exported_projects.len();
    state
        .exported_projects
        .retain(|a| !(a.url_id == request.url_id && a.user_id == user_id));
    if state.exported_projects.len() < before {
        ACK.into_response()
    } else {
        not_found("export")
    }
}
