use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// --- Extraction ---

/// One unit of extraction work. Built per incoming file and consumed once.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub path: PathBuf,
    pub enable_ocr: bool,
}

/// Per-file outcome. `extracted_text` and `error` are mutually exclusive;
/// `status` is 200, 400 (unsupported type) or 500 (extraction failure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: u16,
}

impl ExtractionResult {
    pub fn success(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            extracted_text: Some(text.into()),
            error: None,
            status: 200,
        }
    }

    pub fn failure(filename: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            filename: filename.into(),
            extracted_text: None,
            error: Some(message.into()),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleExtractResponse {
    pub filename: String,
    pub extracted_text: String,
}

/// Batch envelope. Always carried with HTTP 200 once the batch ran; per-file
/// status lives in each entry and callers correlate by `filename`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<ExtractionResult>,
}

// --- Misc ---

#[derive(Debug, Serialize, Deserialize)]
pub struct SupportedTypesResponse {
    pub supported_file_types: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StylesResponse {
    pub styles: Vec<String>,
}
