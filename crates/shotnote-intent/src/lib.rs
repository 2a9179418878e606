//! Text analysis for Shotnote captures.
//!
//! Turns raw OCR output into the pieces of a capture record: normalized
//! body, kind, title, and an optional reminder instant.

pub mod classifier;
pub mod text;
pub mod time_hint;

pub use classifier::{classify, tokenize, KeywordSets};
pub use text::{
    normalize, summarize_title, DEFAULT_TITLE_WORDS, TRUNCATION_MARKER, UNTITLED_CAPTURE,
};
pub use time_hint::{extract_time_hint, extract_time_hint_at};
