//! Concrete extractors behind the uniform [`papyrus_core::Extractor`]
//! contract, plus the OCR engine wrapper and the routing extractor set.

pub mod docx;
pub mod image;
pub mod ocr;
mod ooxml;
pub mod pdf;
pub mod pptx;
pub mod set;
pub mod text;

pub use docx::DocxExtractor;
pub use image::ImageExtractor;
pub use ocr::OcrEngine;
pub use pdf::PdfExtractor;
pub use pptx::PptxExtractor;
pub use set::ExtractorSet;
pub use text::TextExtractor;
