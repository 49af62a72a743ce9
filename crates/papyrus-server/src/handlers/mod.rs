pub mod deck;
pub mod extract;
pub mod root;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Error body in the original API's shape: `{"detail": "..."}`.
pub(crate) fn detail(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "detail": message.into() }))).into_response()
}
