//! Whitespace normalization and title summarization.

/// Placeholder body for captures that carry no text at all.
pub const UNTITLED_CAPTURE: &str = "Untitled capture";

/// Default number of words kept in a title.
pub const DEFAULT_TITLE_WORDS: usize = 8;

/// Appended to a title when words were dropped.
pub const TRUNCATION_MARKER: char = '…';

/// Collapse every whitespace run to a single space and trim the ends.
///
/// Never returns an empty string: blank input yields [`UNTITLED_CAPTURE`].
pub fn normalize(raw: &str) -> String {
    let compact = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.is_empty() {
        UNTITLED_CAPTURE.to_string()
    } else {
        compact
    }
}

/// Keep the first `max_words` words of normalized text.
///
/// Words are separated by single spaces, as produced by [`normalize`]. When
/// words were dropped the result ends with [`TRUNCATION_MARKER`], attached
/// directly to the last kept word.
pub fn summarize_title(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    let mut summary = words
        .iter()
        .take(max_words)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > max_words {
        summary.push(TRUNCATION_MARKER);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Buy\tmilk \n\n tomorrow  "), "Buy milk tomorrow");
    }

    #[test]
    fn test_normalize_handles_unicode_whitespace() {
        assert_eq!(normalize("Call\u{00A0}\u{2003}mom"), "Call mom");
    }

    #[test]
    fn test_normalize_empty_yields_placeholder() {
        assert_eq!(normalize(""), UNTITLED_CAPTURE);
        assert_eq!(normalize(" \n\t "), UNTITLED_CAPTURE);
    }

    #[test]
    fn test_normalize_never_empty() {
        for input in ["", " ", "\r\n", "a", "  a  b  ", "\u{3000}"] {
            assert!(!normalize(input).is_empty(), "input {:?}", input);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(" Team   meeting\nmonday ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_title_short_text_unchanged() {
        let text = "Pay rent tomorrow";
        assert_eq!(summarize_title(text, DEFAULT_TITLE_WORDS), text);
    }

    #[test]
    fn test_title_exactly_max_words_unchanged() {
        let text = "one two three four five six seven eight";
        assert_eq!(summarize_title(text, DEFAULT_TITLE_WORDS), text);
    }

    #[test]
    fn test_title_truncates_with_marker() {
        let text = "one two three four five six seven eight nine ten";
        assert_eq!(
            summarize_title(text, DEFAULT_TITLE_WORDS),
            "one two three four five six seven eight…"
        );
    }

    #[test]
    fn test_title_custom_limit() {
        assert_eq!(summarize_title("a b c d", 2), "a b…");
    }

    #[test]
    fn test_title_of_placeholder() {
        let body = normalize("");
        assert_eq!(summarize_title(&body, DEFAULT_TITLE_WORDS), UNTITLED_CAPTURE);
    }
}
