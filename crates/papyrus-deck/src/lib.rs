//! Flashcard-deck-to-presentation generator. Unrelated to extraction: takes
//! a list of front/back cards and renders a minimal OOXML presentation with
//! two styled slides per card.

mod template;

use std::io::{Cursor, Write};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use papyrus_core::error::{PapyrusError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

#[derive(Debug, Deserialize)]
pub struct DeckRequest {
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckStyle {
    Classic,
    Advanced,
}

impl DeckStyle {
    /// Unknown style names fall back to `Advanced`, matching the original
    /// service's lookup behavior.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "classic" => DeckStyle::Classic,
            _ => DeckStyle::Advanced,
        }
    }

    pub fn names() -> Vec<String> {
        vec!["classic".to_string(), "advanced".to_string()]
    }

    fn background(self, is_front: bool) -> &'static str {
        match (self, is_front) {
            (DeckStyle::Classic, true) => "FFFFFF",
            (DeckStyle::Classic, false) => "F2F2F2",
            (DeckStyle::Advanced, true) => "FF8C00",
            (DeckStyle::Advanced, false) => "191970",
        }
    }

    fn text_color(self) -> &'static str {
        match self {
            DeckStyle::Classic => "1F1F1F",
            DeckStyle::Advanced => "FFFFFF",
        }
    }

    fn bold(self) -> bool {
        matches!(self, DeckStyle::Advanced)
    }
}

/// Font size in hundredths of a point, stepped down for longer card text so
/// it stays inside the text box.
fn font_size_for(text: &str) -> u32 {
    let length = text.chars().count();
    if length > 200 {
        2400
    } else if length > 100 {
        2800
    } else {
        3600
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Render a deck to presentation bytes: one front slide and one back slide
/// per card, in card order.
pub fn build_deck(cards: &[Flashcard], style: DeckStyle) -> Result<Vec<u8>> {
    let mut sides: Vec<(&str, bool)> = Vec::with_capacity(cards.len() * 2);
    for card in cards {
        sides.push((card.front.as_str(), true));
        sides.push((card.back.as_str(), false));
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    let mut put = |writer: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, body: String| -> Result<()> {
        writer
            .start_file(name, options)
            .map_err(|e| PapyrusError::Deck(format!("failed to write {name}: {e}")))?;
        writer.write_all(body.as_bytes())?;
        Ok(())
    };

    put(
        &mut writer,
        "[Content_Types].xml",
        template::content_types(sides.len()),
    )?;
    put(&mut writer, "_rels/.rels", template::package_rels())?;
    put(
        &mut writer,
        "ppt/presentation.xml",
        template::presentation(sides.len()),
    )?;
    put(
        &mut writer,
        "ppt/_rels/presentation.xml.rels",
        template::presentation_rels(sides.len()),
    )?;
    put(
        &mut writer,
        "ppt/slideMasters/slideMaster1.xml",
        template::slide_master(),
    )?;
    put(
        &mut writer,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        template::slide_master_rels(),
    )?;
    put(
        &mut writer,
        "ppt/slideLayouts/slideLayout1.xml",
        template::slide_layout(),
    )?;
    put(
        &mut writer,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        template::slide_layout_rels(),
    )?;
    put(&mut writer, "ppt/theme/theme1.xml", template::theme())?;

    for (index, (text, is_front)) in sides.iter().enumerate() {
        let number = index + 1;
        let slide = template::slide(
            &escape_xml(text),
            style.background(*is_front),
            style.text_color(),
            font_size_for(text),
            style.bold(),
        );
        put(&mut writer, &format!("ppt/slides/slide{number}.xml"), slide)?;
        put(
            &mut writer,
            &format!("ppt/slides/_rels/slide{number}.xml.rels"),
            template::slide_rels(),
        )?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| PapyrusError::Deck(format!("failed to finish archive: {e}")))?;
    Ok(cursor.into_inner())
}
