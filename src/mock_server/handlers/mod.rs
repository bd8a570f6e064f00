//! HTTP request handlers for the mock server.
//!
//! One module per listable resource kind; the cursor mechanics they share
//! live here.

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

pub mod folders;
pub mod projects;
pub mod sequences;

pub use folders::*;
pub use projects::*;
pub use sequences::*;

/// Page size applied when the query omits `pageSize`, like the real API.
const FALLBACK_PAGE_SIZE: u32 = 50;

/// Slice one page out of `items` according to an offset cursor.
///
/// Tokens are stringified offsets: opaque enough for clients, trivial to
/// decode here. Returns the page plus the token for the next one, `None`
/// once the listing is exhausted.
fn paginate(
    items: &[&Value],
    page_size: Option<u32>,
    next_token: Option<&str>,
) -> (Vec<Value>, Option<String>) {
    let page_size = page_size.unwrap_or(FALLBACK_PAGE_SIZE).max(1) as usize;
    let start = next_token
        .and_then(|t| t.parse::<usize>().ok())
        .unwrap_or(0)
        .min(items.len());
    let end = (start + page_size).min(items.len());

    let page = items[start..end].iter().map(|v| (*v).clone()).collect();
    let next = (end < items.len()).then(|| end.to_string());
    (page, next)
}

/// Wrap a page of items in the API's list envelope:
/// `{<key>: [...], "nextToken": <token or null>}`.
fn list_envelope(key: &str, items: Vec<Value>, next_token: Option<String>) -> Value {
    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), Value::Array(items));
    body.insert(
        "nextToken".to_string(),
        next_token.map(Value::String).unwrap_or(Value::Null),
    );
    Value::Object(body)
}

/// The API's conventional error envelope, with a 404 status.
fn not_found(kind: &str, id: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {"message": format!("No {kind} found with id: {id}")}
        })),
    )
}
