use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use papyrus_core::error::{PapyrusError, Result};
use papyrus_core::Extractor;

use crate::ocr::OcrEngine;
use crate::ooxml;

const DOCUMENT_PART: &str = "word/document.xml";
const MEDIA_PREFIX: &str = "word/media/";

/// DOCX extractor: paragraph text from `word/document.xml`. The OCR variant
/// additionally recognizes every embedded image under `word/media/`.
pub struct DocxExtractor {
    ocr: Option<Arc<OcrEngine>>,
}

impl DocxExtractor {
    pub fn plain() -> Self {
        Self { ocr: None }
    }

    pub fn with_ocr(engine: Arc<OcrEngine>) -> Self {
        Self { ocr: Some(engine) }
    }
}

#[async_trait]
impl Extractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let want_media = self.ocr.is_some();
        let source = path.to_path_buf();
        let (mut text, media) =
            tokio::task::spawn_blocking(move || read_document(&source, want_media))
                .await
                .map_err(|e| PapyrusError::Extraction(format!("DOCX worker failed: {e}")))??;

        if let Some(engine) = &self.ocr {
            for (name, bytes) in &media {
                let extension = name.rsplit('.').next().unwrap_or("png");
                let recognized = engine.recognize_bytes(bytes, extension).await?;
                text.push_str(&format!("\nOCR from Embedded Image:\n{recognized}\n"));
            }
        }

        Ok(text)
    }
}

type MediaEntry = (String, Vec<u8>);

fn read_document(path: &Path, want_media: bool) -> Result<(String, Vec<MediaEntry>)> {
    let mut archive = ooxml::open_container(path)?;
    let xml = ooxml::read_part(&mut archive, DOCUMENT_PART)?;
    let text = ooxml::collect_text(&xml, b"w:t", b"w:p")?;

    let mut media = Vec::new();
    if want_media {
        let mut names: Vec<String> = archive
            .file_names()
            .filter(|name| name.starts_with(MEDIA_PREFIX))
            .map(str::to_string)
            .collect();
        names.sort();
        for name in names {
            let bytes = ooxml::read_binary_part(&mut archive, &name)?;
            media.push((name, bytes));
        }
    }

    Ok((text, media))
}
