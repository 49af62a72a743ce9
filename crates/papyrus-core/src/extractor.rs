use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Uniform contract every format-specific extractor satisfies: given a
/// readable file, produce a text string or fail with a descriptive error.
/// OCR-augmented variants additionally append recognized text for embedded
/// raster images, labeled by page/slide and image ordinal.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<String>;
}
