//! Project endpoint handlers.

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

/// Query parameters for listing projects.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsQuery {
    pub page_size: Option<u32>,
    pub next_token: Option<String>,
    pub name: Option<String>,
}

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_project(&id) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => not_found("project", &id).into_response(),
    }
}

/// GET /projects
pub async fn list_projects(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<ListProjectsQuery>,
) -> impl IntoResponse {
    let state = state.read().await;

    let matching = state.list_projects(query.name.as_deref());
    let (projects, next) = paginate(&matching, query.page_size, query.next_token.as_deref());

    (
        StatusCode::OK,
        Json(list_envelope("projects", projects, next)),
    )
}
