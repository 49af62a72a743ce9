use std::path::Path;

use tokio::process::Command;

use papyrus_core::error::{PapyrusError, Result};
use papyrus_core::AppConfig;

/// Wrapper around the external `tesseract` binary. The engine itself is an
/// external collaborator; this type only shapes its invocation and errors.
pub struct OcrEngine {
    binary: String,
    language: String,
}

impl OcrEngine {
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.tesseract_binary, &config.ocr_language)
    }

    /// Run OCR over an image file on disk and return the recognized text.
    pub async fn recognize_file(&self, path: &Path) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .await
            .map_err(|e| PapyrusError::Ocr(format!("failed to run {}: {e}", self.binary)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PapyrusError::Ocr(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run OCR over an in-memory image, staging it through a temp file with
    /// the given extension so the engine can sniff the format.
    pub async fn recognize_bytes(&self, bytes: &[u8], extension: &str) -> Result<String> {
        let staged = tempfile::Builder::new()
            .prefix("papyrus-ocr-")
            .suffix(&format!(".{extension}"))
            .tempfile()?;
        tokio::fs::write(staged.path(), bytes).await?;
        self.recognize_file(staged.path()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_an_ocr_error() {
        let engine = OcrEngine::new("papyrus-no-such-tesseract", "eng");
        let err = engine
            .recognize_file(Path::new("/tmp/whatever.png"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("papyrus-no-such-tesseract"));
    }

    #[tokio::test]
    async fn recognize_bytes_stages_through_temp_file() {
        // Still fails on the missing binary, but exercises the staging path.
        let engine = OcrEngine::new("papyrus-no-such-tesseract", "eng");
        let err = engine.recognize_bytes(b"not an image", "png").await.unwrap_err();
        assert!(matches!(err, PapyrusError::Ocr(_)));
    }
}
