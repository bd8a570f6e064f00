//! DNA sequence endpoint handlers.
//!
//! The one resource whose list envelope key (`dnaSequences`) differs from
//! its path segment (`dna-sequences`).

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

/// Query parameters for listing DNA sequences.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSequencesQuery {
    pub page_size: Option<u32>,
    pub next_token: Option<String>,
    pub folder_id: Option<String>,
    pub name: Option<String>,
}

/// GET /dna-sequences/{id}
pub async fn get_sequence(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.get_sequence(&id) {
        Some(sequence) => (StatusCode::OK, Json(sequence.clone())).into_response(),
        None => not_found("dna sequence", &id).into_response(),
    }
}

/// GET /dna-sequences
pub async fn list_sequences(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<ListSequencesQuery>,
) -> impl IntoResponse {
    let state = state.read().await;

    let matching = state.list_sequences(query.folder_id.as_deref(), query.name.as_deref());
    let (sequences, next) = paginate(&matching, query.page_size, query.next_token.as_deref());

    (
        StatusCode::OK,
        Json(list_envelope("dnaSequences", sequences, next)),
    )
}
