use axum::{http::StatusCode, response::IntoResponse, Json};

use papyrus_core::api_types::{SupportedTypesResponse, WelcomeResponse};
use papyrus_core::SUPPORTED_EXTENSIONS;

pub async fn welcome() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(WelcomeResponse {
            message: "Welcome to the Text Extraction API".to_string(),
        }),
    )
}

/// GET /supported-file-types — the extension set the router accepts.
pub async fn supported_file_types() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(SupportedTypesResponse {
            supported_file_types: SUPPORTED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }),
    )
}
