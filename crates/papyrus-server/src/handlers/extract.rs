use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::info;

use papyrus_core::api_types::{BatchResponse, SingleExtractResponse};
use papyrus_core::{ExtractionRequest, ExtractionResult};

use super::detail;
use crate::staging::Staging;
use crate::state::AppState;

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// POST /extract — stage one uploaded file, extract, clean up.
pub async fn extract_single(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut enable_ocr = false;
    let mut upload: Option<(String, Bytes)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return detail(
                    StatusCode::BAD_REQUEST,
                    format!("Malformed multipart body: {e}"),
                )
            }
        };

        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(bytes) => upload = Some((filename, bytes)),
                    Err(e) => {
                        return detail(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read upload: {e}"),
                        )
                    }
                }
            }
            Some("enable_ocr") => {
                if let Ok(text) = field.text().await {
                    enable_ocr = parse_bool(&text);
                }
            }
            _ => {}
        }
    }

    let Some((filename, bytes)) = upload else {
        return detail(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    // Staging is dropped when the handler returns, removing the temp file on
    // success and failure alike.
    let mut staging = match Staging::new() {
        Ok(staging) => staging,
        Err(e) => {
            return detail(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to stage upload: {e}"),
            )
        }
    };
    let path = match staging.stage(&filename, &bytes).await {
        Ok(path) => path,
        Err(e) => {
            return detail(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to stage upload: {e}"),
            )
        }
    };

    info!(file = %filename, enable_ocr, "extracting uploaded file");
    let result = state
        .service
        .extract(&ExtractionRequest { path, enable_ocr })
        .await;

    match result {
        ExtractionResult {
            status: 200,
            extracted_text: Some(text),
            ..
        } => (
            StatusCode::OK,
            Json(SingleExtractResponse {
                filename,
                extracted_text: text,
            }),
        )
            .into_response(),
        ExtractionResult { status, error, .. } => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            detail(
                status,
                error.unwrap_or_else(|| "extraction failed".to_string()),
            )
        }
    }
}

/// POST /extract-batch — stage every uploaded file, fan out over the bounded
/// dispatcher, and answer 200 with one result entry per file. A file whose
/// staging fails still gets a 500 entry rather than disappearing.
pub async fn extract_batch(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut enable_ocr = false;
    let mut max_workers: Option<i64> = None;
    let mut staged = Vec::new();
    let mut staging_failures: Vec<ExtractionResult> = Vec::new();

    let mut staging = match Staging::new() {
        Ok(staging) => staging,
        Err(e) => {
            return detail(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create staging area: {e}"),
            )
        }
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return detail(
                    StatusCode::BAD_REQUEST,
                    format!("Malformed multipart body: {e}"),
                )
            }
        };

        match field.name() {
            Some("files") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                match field.bytes().await {
                    Ok(bytes) => match staging.stage(&filename, &bytes).await {
                        Ok(path) => staged.push(path),
                        Err(e) => staging_failures.push(ExtractionResult::failure(
                            &filename,
                            format!("Error processing file {filename}: staging failed: {e}"),
                            500,
                        )),
                    },
                    Err(e) => staging_failures.push(ExtractionResult::failure(
                        &filename,
                        format!("Error processing file {filename}: upload read failed: {e}"),
                        500,
                    )),
                }
            }
            Some("enable_ocr") => {
                if let Ok(text) = field.text().await {
                    enable_ocr = parse_bool(&text);
                }
            }
            Some("max_workers") => {
                if let Ok(text) = field.text().await {
                    max_workers = text.trim().parse().ok();
                }
            }
            _ => {}
        }
    }

    if staged.is_empty() && staging_failures.is_empty() {
        return detail(StatusCode::BAD_REQUEST, "No files uploaded");
    }

    let max_workers = max_workers.or(Some(state.config.default_max_workers as i64));
    info!(
        files = staged.len() + staging_failures.len(),
        enable_ocr, "extracting uploaded batch"
    );

    let mut results =
        papyrus_dispatch::extract_batch(state.service.clone(), staged, enable_ocr, max_workers)
            .await;
    results.extend(staging_failures);

    (StatusCode::OK, Json(BatchResponse { results })).into_response()
}
