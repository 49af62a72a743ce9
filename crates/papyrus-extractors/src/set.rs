use std::sync::Arc;

use papyrus_core::{Extractor, FormatKind};

use crate::docx::DocxExtractor;
use crate::image::ImageExtractor;
use crate::ocr::OcrEngine;
use crate::pdf::PdfExtractor;
use crate::pptx::PptxExtractor;
use crate::text::TextExtractor;

/// Binds every format kind to its extractor pair (plain, OCR-augmented),
/// built once at startup. Routing can only fail at the extension check,
/// which happens before a `FormatKind` exists.
pub struct ExtractorSet {
    text: Arc<TextExtractor>,
    image: Arc<ImageExtractor>,
    pdf: Arc<PdfExtractor>,
    pdf_ocr: Arc<PdfExtractor>,
    docx: Arc<DocxExtractor>,
    docx_ocr: Arc<DocxExtractor>,
    pptx: Arc<PptxExtractor>,
    pptx_ocr: Arc<PptxExtractor>,
}

impl ExtractorSet {
    pub fn new(engine: Arc<OcrEngine>) -> Self {
        Self {
            text: Arc::new(TextExtractor),
            image: Arc::new(ImageExtractor::new(engine.clone())),
            pdf: Arc::new(PdfExtractor::plain()),
            pdf_ocr: Arc::new(PdfExtractor::with_ocr(engine.clone())),
            docx: Arc::new(DocxExtractor::plain()),
            docx_ocr: Arc::new(DocxExtractor::with_ocr(engine.clone())),
            pptx: Arc::new(PptxExtractor::plain()),
            pptx_ocr: Arc::new(PptxExtractor::with_ocr(engine)),
        }
    }

    /// The router: pick the extractor for a format kind. Images always OCR;
    /// plain text never does; the container formats honor the flag.
    pub fn route(&self, kind: FormatKind, enable_ocr: bool) -> Arc<dyn Extractor> {
        match (kind, enable_ocr) {
            (FormatKind::Text, _) => self.text.clone(),
            (FormatKind::Image, _) => self.image.clone(),
            (FormatKind::Pdf, false) => self.pdf.clone(),
            (FormatKind::Pdf, true) => self.pdf_ocr.clone(),
            (FormatKind::Docx, false) => self.docx.clone(),
            (FormatKind::Docx, true) => self.docx_ocr.clone(),
            (FormatKind::Pptx, false) => self.pptx.clone(),
            (FormatKind::Pptx, true) => self.pptx_ocr.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_routes_with_and_without_ocr() {
        let set = ExtractorSet::new(Arc::new(OcrEngine::new("tesseract", "eng")));
        for kind in [
            FormatKind::Pdf,
            FormatKind::Docx,
            FormatKind::Pptx,
            FormatKind::Image,
            FormatKind::Text,
        ] {
            for enable_ocr in [false, true] {
                let _extractor = set.route(kind, enable_ocr);
            }
        }
    }
}
