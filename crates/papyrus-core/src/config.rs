use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub tesseract_binary: String,
    pub ocr_language: String,
    pub default_max_workers: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server_host: std::env::var("PAPYRUS_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: std::env::var("PAPYRUS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            tesseract_binary: std::env::var("PAPYRUS_TESSERACT_BIN")
                .unwrap_or_else(|_| "tesseract".into()),
            ocr_language: std::env::var("PAPYRUS_OCR_LANG").unwrap_or_else(|_| "eng".into()),
            default_max_workers: std::env::var("PAPYRUS_DEFAULT_WORKERS")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(4),
        }
    }
}
