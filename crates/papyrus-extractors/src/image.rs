use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use papyrus_core::error::Result;
use papyrus_core::Extractor;

use crate::ocr::OcrEngine;

/// Raster images have no machine text of their own; extraction is OCR,
/// regardless of the caller's OCR flag.
pub struct ImageExtractor {
    engine: Arc<OcrEngine>,
}

impl ImageExtractor {
    pub fn new(engine: Arc<OcrEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Extractor for ImageExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        self.engine.recognize_file(path).await
    }
}
