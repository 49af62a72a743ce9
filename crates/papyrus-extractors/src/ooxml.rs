use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use papyrus_core::error::{PapyrusError, Result};

/// Shared plumbing for the OOXML container formats (DOCX, PPTX): both are
/// zip archives of XML parts plus embedded media blobs.
pub(crate) fn open_container(path: &Path) -> Result<ZipArchive<std::fs::File>> {
    let file = std::fs::File::open(path)?;
    ZipArchive::new(file)
        .map_err(|e| PapyrusError::Extraction(format!("failed to open container: {e}")))
}

pub(crate) fn read_part(archive: &mut ZipArchive<std::fs::File>, name: &str) -> Result<String> {
    let mut part = archive
        .by_name(name)
        .map_err(|e| PapyrusError::Extraction(format!("missing part {name}: {e}")))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

pub(crate) fn read_binary_part(
    archive: &mut ZipArchive<std::fs::File>,
    name: &str,
) -> Result<Vec<u8>> {
    let mut part = archive
        .by_name(name)
        .map_err(|e| PapyrusError::Extraction(format!("missing part {name}: {e}")))?;
    let mut bytes = Vec::new();
    part.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Pull the character content of every `text_tag` element, appending a
/// newline each time a `paragraph_tag` element closes.
pub(crate) fn collect_text(xml: &str, text_tag: &[u8], paragraph_tag: &[u8]) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == text_tag => in_text = true,
            Ok(Event::End(e)) if e.name().as_ref() == text_tag => in_text = false,
            Ok(Event::End(e)) if e.name().as_ref() == paragraph_tag => out.push('\n'),
            Ok(Event::Text(t)) if in_text => {
                let fragment = t
                    .unescape()
                    .map_err(|e| PapyrusError::Extraction(format!("malformed XML text: {e}")))?;
                out.push_str(&fragment);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(PapyrusError::Extraction(format!("malformed XML part: {e}")));
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_text_with_paragraph_breaks() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>
            <w:p><w:r><w:t>Second </w:t></w:r><w:r><w:t>paragraph</w:t></w:r></w:p>
        </w:body></w:document>"#;

        let text = collect_text(xml, b"w:t", b"w:p").unwrap();
        assert_eq!(text, "First paragraph\nSecond paragraph\n");
    }

    #[test]
    fn ignores_text_outside_target_elements() {
        let xml = "<root>stray<w:p><w:t>kept</w:t></w:p>stray</root>";
        assert_eq!(collect_text(xml, b"w:t", b"w:p").unwrap(), "kept\n");
    }

    #[test]
    fn unescapes_entities() {
        let xml = "<p><t>a &amp; b &lt; c</t></p>";
        assert_eq!(collect_text(xml, b"t", b"p").unwrap(), "a & b < c\n");
    }

    #[test]
    fn mismatched_tags_are_an_extraction_error() {
        let xml = "<w:p><w:t>text</w:bad></w:p>";
        assert!(collect_text(xml, b"w:t", b"w:p").is_err());
    }
}
