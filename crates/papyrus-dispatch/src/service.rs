use tracing::warn;

use papyrus_core::{ExtractionRequest, ExtractionResult, FormatKind};
use papyrus_extractors::ExtractorSet;

/// Single-file extraction service. `extract` is a total function: every
/// outcome, including unsupported types and extractor failures, becomes an
/// `ExtractionResult` — no error escapes this boundary.
pub struct ExtractionService {
    extractors: ExtractorSet,
}

impl ExtractionService {
    pub fn new(extractors: ExtractorSet) -> Self {
        Self { extractors }
    }

    pub async fn extract(&self, request: &ExtractionRequest) -> ExtractionResult {
        let filename = papyrus_core::source_name(&request.path);

        let kind = match FormatKind::from_path(&request.path) {
            Ok(kind) => kind,
            Err(e) => {
                warn!(file = %request.path.display(), "rejected: {e}");
                return ExtractionResult::failure(filename, e.to_string(), e.status_code());
            }
        };

        let extractor = self.extractors.route(kind, request.enable_ocr);
        match extractor.extract(&request.path).await {
            Ok(text) => ExtractionResult::success(filename, text),
            Err(e) => {
                warn!(file = %request.path.display(), "extraction failed: {e}");
                ExtractionResult::failure(
                    filename,
                    format!("Error processing file {}: {e}", request.path.display()),
                    e.status_code(),
                )
            }
        }
    }
}
