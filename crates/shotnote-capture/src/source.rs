//! Where the text of a capture came from.

use std::fmt;

/// Origin of the text a capture was built from, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Text recognized in the screenshot.
    Ocr,
    /// Text typed by the user because OCR produced nothing.
    Fallback,
    /// Label derived from the screenshot's file name.
    FileName,
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSource::Ocr => write!(f, "ocr"),
            TextSource::Fallback => write!(f, "fallback"),
            TextSource::FileName => write!(f, "file_name"),
        }
    }
}

/// Turn a file name into a readable label.
///
/// Drops the final extension and replaces underscores with spaces:
/// `"pay_rent.png"` becomes `"pay rent"`. A leading dot is part of the name,
/// not an extension.
pub fn label_from_file_name(name: &str) -> String {
    let stem = match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => &name[..idx],
        _ => name,
    };
    stem.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_strips_extension_and_underscores() {
        assert_eq!(label_from_file_name("brainstorm_ideas.png"), "brainstorm ideas");
        assert_eq!(label_from_file_name("pay_bill.PNG"), "pay bill");
    }

    #[test]
    fn test_label_strips_only_last_extension() {
        assert_eq!(label_from_file_name("shot.2026.jpeg"), "shot.2026");
    }

    #[test]
    fn test_label_without_extension() {
        assert_eq!(label_from_file_name("Screenshot_1"), "Screenshot 1");
    }

    #[test]
    fn test_label_keeps_dotfiles_and_trailing_dots() {
        assert_eq!(label_from_file_name(".hidden"), ".hidden");
        assert_eq!(label_from_file_name("notes."), "notes.");
    }

    #[test]
    fn test_text_source_display() {
        assert_eq!(TextSource::Ocr.to_string(), "ocr");
        assert_eq!(TextSource::Fallback.to_string(), "fallback");
        assert_eq!(TextSource::FileName.to_string(), "file_name");
    }
}
