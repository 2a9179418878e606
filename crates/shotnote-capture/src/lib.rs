//! Capture pipeline for Shotnote.
//!
//! Drives one ingestion from screenshot bytes to a stored record:
//! OCR (with fallback text) -> normalize -> classify/title/hint -> append.

pub mod orchestrator;
pub mod source;

pub use orchestrator::{
    status_message, CaptureFile, CaptureOrchestrator, IngestOutcome, IngestRequest,
    CLEARED_STATUS, NO_FILE_STATUS,
};
pub use source::{label_from_file_name, TextSource};
