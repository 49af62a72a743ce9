use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;

use papyrus_core::error::{PapyrusError, Result};
use papyrus_core::Extractor;

use crate::ocr::OcrEngine;
use crate::ooxml;

const SLIDE_PREFIX: &str = "ppt/slides/slide";
const SLIDE_SUFFIX: &str = ".xml";

/// PPTX extractor: text frames from each slide in slide order. The OCR
/// variant labels slides and recognizes the images each slide references.
pub struct PptxExtractor {
    ocr: Option<Arc<OcrEngine>>,
}

impl PptxExtractor {
    pub fn plain() -> Self {
        Self { ocr: None }
    }

    pub fn with_ocr(engine: Arc<OcrEngine>) -> Self {
        Self { ocr: Some(engine) }
    }
}

struct SlideContent {
    number: u32,
    text: String,
    images: Vec<(String, Vec<u8>)>,
}

#[async_trait]
impl Extractor for PptxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let want_images = self.ocr.is_some();
        let source = path.to_path_buf();
        let slides = tokio::task::spawn_blocking(move || read_slides(&source, want_images))
            .await
            .map_err(|e| PapyrusError::Extraction(format!("PPTX worker failed: {e}")))??;

        let mut out = String::new();
        match &self.ocr {
            None => {
                for slide in &slides {
                    out.push_str(&slide.text);
                }
            }
            Some(engine) => {
                for slide in &slides {
                    out.push_str(&format!("Slide {}:\n", slide.number));
                    out.push_str(&slide.text);
                    for (name, bytes) in &slide.images {
                        let extension = name.rsplit('.').next().unwrap_or("png");
                        let recognized = engine.recognize_bytes(bytes, extension).await?;
                        out.push_str(&format!(
                            "\nOCR from Image on Slide {}:\n{}\n",
                            slide.number, recognized
                        ));
                    }
                }
            }
        }

        Ok(out)
    }
}

fn read_slides(path: &Path, want_images: bool) -> Result<Vec<SlideContent>> {
    let mut archive = ooxml::open_container(path)?;

    let mut numbers: Vec<u32> = archive.file_names().filter_map(slide_number).collect();
    numbers.sort_unstable();

    let mut slides = Vec::with_capacity(numbers.len());
    for number in numbers {
        let xml = ooxml::read_part(&mut archive, &format!("{SLIDE_PREFIX}{number}{SLIDE_SUFFIX}"))?;
        let text = ooxml::collect_text(&xml, b"a:t", b"a:p")?;

        let mut images = Vec::new();
        if want_images {
            let rels_name = format!("ppt/slides/_rels/slide{number}.xml.rels");
            if let Ok(rels_xml) = ooxml::read_part(&mut archive, &rels_name) {
                for target in image_targets(&rels_xml)? {
                    let bytes = ooxml::read_binary_part(&mut archive, &target)?;
                    images.push((target, bytes));
                }
            }
        }

        slides.push(SlideContent {
            number,
            text,
            images,
        });
    }

    Ok(slides)
}

fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix(SLIDE_PREFIX)?
        .strip_suffix(SLIDE_SUFFIX)?
        .parse()
        .ok()
}

/// Resolve the image relationships of one slide to archive part names, in
/// relationship-file order.
fn image_targets(rels_xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(rels_xml);
    let mut targets = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| PapyrusError::Extraction(format!("malformed rels part: {e}")))?;
        let element = match &event {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"Relationship" => e,
            Event::Eof => break,
            _ => continue,
        };

        let mut rel_type = String::new();
        let mut target = String::new();
        for attr in element.attributes().flatten() {
            let value = attr
                .unescape_value()
                .map_err(|e| PapyrusError::Extraction(format!("malformed rels part: {e}")))?;
            match attr.key.as_ref() {
                b"Type" => rel_type = value.into_owned(),
                b"Target" => target = value.into_owned(),
                _ => {}
            }
        }

        if rel_type.ends_with("/image") && !target.is_empty() {
            targets.push(resolve_target(&target));
        }
    }

    Ok(targets)
}

/// Slide rels use targets relative to `ppt/slides/` (`../media/image1.png`).
fn resolve_target(target: &str) -> String {
    if let Some(rest) = target.strip_prefix("../") {
        format!("ppt/{rest}")
    } else if let Some(rest) = target.strip_prefix('/') {
        rest.to_string()
    } else {
        format!("ppt/slides/{target}")
    }
}
