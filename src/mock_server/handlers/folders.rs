//! Folder endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{list_envelope, not_found, paginate};
use crate::mock_server::state::MockState;

/// Query parameters for listing folders.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFoldersQuery {
    pub page_size: Option<u32>,
    pub next_token: Option<String>,
    pub project_id: Option<String>,
    pub name: Option<String>,
}

/// GET /folders/{id}
pub async fn get_folder(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_folder(&id) {
        Some(folder) => (StatusCode::OK, Json(folder.clone())).into_response(),
        None => not_found("folder", &id).into_response(),
    }
}

/// GET /folders
pub async fn list_folders(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<ListFoldersQuery>,
) -> impl IntoResponse {
    let state = state.read().await;

    let matching = state.list_folders(query.project_id.as_deref(), query.name.as_deref());
    let (folders, next) = paginate(&matching, query.page_size, query.next_token.as_deref());

    (StatusCode::OK, Json(list_envelope("folders", folders, next)))
}
