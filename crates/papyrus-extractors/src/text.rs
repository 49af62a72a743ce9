use std::path::Path;

use async_trait::async_trait;

use papyrus_core::error::{PapyrusError, Result};
use papyrus_core::Extractor;

/// Plain-text files are read as UTF-8; there is no OCR-augmented variant.
pub struct TextExtractor;

#[async_trait]
impl Extractor for TextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        String::from_utf8(bytes)
            .map_err(|e| PapyrusError::Extraction(format!("file is not valid UTF-8: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_utf8_content() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"hello world").unwrap();

        let text = TextExtractor.extract(file.path()).await.unwrap();
        assert_eq!(text, "hello world");
    }

    #[tokio::test]
    async fn invalid_utf8_is_an_extraction_error() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = TextExtractor.extract(file.path()).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = TextExtractor
            .extract(Path::new("/tmp/papyrus-missing-file.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, PapyrusError::Io(_)));
    }
}
