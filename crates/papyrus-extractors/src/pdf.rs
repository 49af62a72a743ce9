use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::debug;

use papyrus_core::error::{PapyrusError, Result};
use papyrus_core::Extractor;

use crate::ocr::OcrEngine;

/// PDF extractor backed by lopdf. The plain variant concatenates page text;
/// the OCR variant labels pages and recognizes embedded raster XObjects.
pub struct PdfExtractor {
    ocr: Option<Arc<OcrEngine>>,
}

impl PdfExtractor {
    pub fn plain() -> Self {
        Self { ocr: None }
    }

    pub fn with_ocr(engine: Arc<OcrEngine>) -> Self {
        Self { ocr: Some(engine) }
    }
}

struct PageContent {
    number: u32,
    text: String,
    /// JPEG blobs of DCT-encoded image XObjects, in resource order.
    images: Vec<Vec<u8>>,
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let want_images = self.ocr.is_some();
        let source = path.to_path_buf();
        let pages = tokio::task::spawn_blocking(move || read_pages(&source, want_images))
            .await
            .map_err(|e| PapyrusError::Extraction(format!("PDF worker failed: {e}")))??;

        let mut out = String::new();
        match &self.ocr {
            None => {
                for page in &pages {
                    out.push_str(&page.text);
                }
            }
            Some(engine) => {
                for page in &pages {
                    out.push_str(&format!("Page {}:\n", page.number));
                    out.push_str(&page.text);
                    out.push('\n');
                    for (ordinal, blob) in page.images.iter().enumerate() {
                        let recognized = engine.recognize_bytes(blob, "jpg").await?;
                        out.push_str(&format!(
                            "\nOCR from Image {} on Page {}:\n{}\n",
                            ordinal + 1,
                            page.number,
                            recognized
                        ));
                    }
                }
            }
        }

        Ok(out)
    }
}

fn read_pages(path: &Path, want_images: bool) -> Result<Vec<PageContent>> {
    let doc = Document::load(path)
        .map_err(|e| PapyrusError::Extraction(format!("failed to parse PDF: {e}")))?;

    let mut pages = Vec::new();
    for (number, page_id) in doc.get_pages() {
        let text = doc
            .extract_text(&[number])
            .map_err(|e| PapyrusError::Extraction(format!("failed to read page {number}: {e}")))?;
        let images = if want_images {
            page_image_blobs(&doc, page_id)
        } else {
            Vec::new()
        };
        pages.push(PageContent {
            number,
            text,
            images,
        });
    }

    Ok(pages)
}

/// Collect the DCT-encoded (baseline JPEG) image XObjects of one page. Other
/// encodings, including filter chains like `[FlateDecode, DCTDecode]`, would
/// need a full decode pipeline; they are skipped.
fn page_image_blobs(doc: &Document, page_id: ObjectId) -> Vec<Vec<u8>> {
    let mut blobs = Vec::new();
    let (inline_resources, resource_ids) = doc.get_page_resources(page_id);

    let mut resource_dicts: Vec<&Dictionary> = Vec::new();
    if let Some(dict) = inline_resources {
        resource_dicts.push(dict);
    }
    for id in resource_ids {
        if let Ok(dict) = doc.get_object(id).and_then(Object::as_dict) {
            resource_dicts.push(dict);
        }
    }

    for resources in resource_dicts {
        let Ok(xobjects) = resources.get(b"XObject") else {
            continue;
        };
        let xobjects = match xobjects {
            Object::Reference(id) => match doc.get_object(*id) {
                Ok(resolved) => resolved,
                Err(_) => continue,
            },
            other => other,
        };
        let Ok(xobject_dict) = xobjects.as_dict() else {
            continue;
        };

        for (_name, entry) in xobject_dict.iter() {
            let stream = match entry {
                Object::Reference(id) => match doc.get_object(*id).and_then(Object::as_stream) {
                    Ok(stream) => stream,
                    Err(_) => continue,
                },
                Object::Stream(stream) => stream,
                _ => continue,
            };

            let is_image = stream
                .dict
                .get(b"Subtype")
                .and_then(Object::as_name)
                .map(|name| name == b"Image")
                .unwrap_or(false);
            if !is_image {
                continue;
            }

            if is_dct_encoded(&stream.dict) {
                blobs.push(stream.content.clone());
            } else {
                debug!("skipping embedded image with non-JPEG encoding");
            }
        }
    }

    blobs
}

/// Only a lone `DCTDecode` filter means `stream.content` is raw JPEG. A
/// chained filter array leaves the bytes wrapped in the outer encodings, so
/// those streams are not usable as-is.
fn is_dct_encoded(dict: &Dictionary) -> bool {
    matches!(
        dict.get(b"Filter"),
        Ok(Object::Name(name)) if name.as_slice() == b"DCTDecode"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};
    use std::io::Write;

    fn write_pdf(text: &str) -> tempfile::NamedTempFile {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        doc.save(file.path()).unwrap();
        file
    }

    #[tokio::test]
    async fn extracts_machine_text() {
        let file = write_pdf("Q3 Results");
        let text = PdfExtractor::plain().extract(file.path()).await.unwrap();
        assert!(text.contains("Q3 Results"), "got: {text:?}");
    }

    #[tokio::test]
    async fn garbage_bytes_are_an_extraction_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"definitely not a pdf").unwrap();

        let err = PdfExtractor::plain().extract(file.path()).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("PDF"));
    }

    #[test]
    fn dct_filter_detection() {
        let dct = dictionary! { "Filter" => "DCTDecode" };
        assert!(is_dct_encoded(&dct));

        let chained = dictionary! {
            "Filter" => vec!["FlateDecode".into(), Object::Name(b"DCTDecode".to_vec())],
        };
        assert!(!is_dct_encoded(&chained), "chained bytes are not raw JPEG");

        let flate = dictionary! { "Filter" => "FlateDecode" };
        assert!(!is_dct_encoded(&flate));
    }

    #[test]
    fn only_raw_jpeg_blobs_are_collected() {
        let mut doc = Document::with_version("1.5");
        let jpeg_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Filter" => "DCTDecode",
            },
            vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10],
        ));
        let chained_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Filter" => vec!["FlateDecode".into(), Object::Name(b"DCTDecode".to_vec())],
            },
            vec![0x78, 0x9C, 0x63, 0x60],
        ));
        let resources_id = doc.add_object(dictionary! {
            "XObject" => dictionary! { "Im1" => jpeg_id, "Im2" => chained_id },
        });
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let blobs = page_image_blobs(&doc, page_id);
        assert_eq!(blobs.len(), 1, "the flate-wrapped stream must be skipped");
        assert!(
            blobs[0].starts_with(&[0xFF, 0xD8]),
            "collected blob is not raw JPEG: {:02x?}",
            &blobs[0][..4.min(blobs[0].len())]
        );
    }
}
