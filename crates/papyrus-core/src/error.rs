use thiserror::Error;

#[derive(Error, Debug)]
pub enum PapyrusError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck error: {0}")]
    Deck(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PapyrusError {
    /// HTTP status the error maps to at the service boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            PapyrusError::UnsupportedType(_) => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, PapyrusError>;
