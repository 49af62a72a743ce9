use std::path::Path;

use crate::error::{PapyrusError, Result};

/// Extensions the router recognizes. Anything else is rejected with a 400
/// before extraction is attempted.
pub const SUPPORTED_EXTENSIONS: [&str; 7] =
    [".pdf", ".pptx", ".png", ".jpg", ".jpeg", ".txt", ".docx"];

/// Closed set of format kinds. Each kind is bound to a fixed extractor pair
/// (plain, OCR-augmented) by the extractor set, so the only runtime lookup
/// failure is the explicit unsupported-extension branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Pdf,
    Docx,
    Pptx,
    Image,
    Text,
}

impl FormatKind {
    pub fn from_extension(extension: &str) -> Result<FormatKind> {
        match extension.to_ascii_lowercase().as_str() {
            ".pdf" => Ok(FormatKind::Pdf),
            ".docx" => Ok(FormatKind::Docx),
            ".pptx" => Ok(FormatKind::Pptx),
            ".png" | ".jpg" | ".jpeg" => Ok(FormatKind::Image),
            ".txt" => Ok(FormatKind::Text),
            other => Err(PapyrusError::UnsupportedType(other.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<FormatKind> {
        Self::from_extension(&file_extension(path))
    }
}

/// Lower-cased extension including the leading dot, or an empty string when
/// the path has none.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Display name used to correlate a result with its input file.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn all_supported_extensions_resolve() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(FormatKind::from_extension(ext).is_ok(), "{ext} should route");
        }
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = FormatKind::from_extension(".bmp").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains(".bmp"));
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert_eq!(FormatKind::from_extension(".PDF").unwrap(), FormatKind::Pdf);
        assert_eq!(
            FormatKind::from_extension(".Jpeg").unwrap(),
            FormatKind::Image
        );
    }

    #[test]
    fn images_and_text_route_to_fixed_kinds() {
        assert_eq!(FormatKind::from_extension(".png").unwrap(), FormatKind::Image);
        assert_eq!(FormatKind::from_extension(".jpg").unwrap(), FormatKind::Image);
        assert_eq!(FormatKind::from_extension(".txt").unwrap(), FormatKind::Text);
    }

    #[test]
    fn path_helpers() {
        let path = PathBuf::from("/tmp/batch/Report.PDF");
        assert_eq!(file_extension(&path), ".pdf");
        assert_eq!(source_name(&path), "Report.PDF");
        assert_eq!(FormatKind::from_path(&path).unwrap(), FormatKind::Pdf);

        let bare = PathBuf::from("/tmp/noext");
        assert_eq!(file_extension(&bare), "");
        assert!(FormatKind::from_path(&bare).is_err());
    }
}
