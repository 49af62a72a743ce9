pub mod api_types;
pub mod config;
pub mod error;
pub mod extractor;
pub mod format;

pub use api_types::{BatchResponse, ExtractionRequest, ExtractionResult};
pub use config::AppConfig;
pub use error::{PapyrusError, Result};
pub use extractor::Extractor;
pub use format::{file_extension, source_name, FormatKind, SUPPORTED_EXTENSIONS};
