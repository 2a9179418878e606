//! Capture orchestrator.
//!
//! Coordinates a single ingestion: OCR with its fallback chain, text
//! analysis, record assembly and the append to the repository. The OCR
//! engine and the repository are injected, so the whole flow runs against
//! fakes in tests.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, info, warn};

use shotnote_core::config::ClassifierConfig;
use shotnote_core::error::ShotnoteError;
use shotnote_core::types::CaptureRecord;
use shotnote_intent::{
    extract_time_hint_at, normalize, summarize_title, KeywordSets, DEFAULT_TITLE_WORDS,
};
use shotnote_ocr::OcrService;
use shotnote_storage::{to_json, write_export, CaptureRepository};

use crate::source::{label_from_file_name, TextSource};

/// Status shown when ingestion is triggered without a screenshot.
pub const NO_FILE_STATUS: &str = "Please choose a screenshot file first.";

/// Status shown after all records were removed.
pub const CLEARED_STATUS: &str = "Cleared all saved items.";

/// A screenshot handed to the pipeline.
#[derive(Debug, Clone)]
pub struct CaptureFile {
    /// Name shown to the user and stored as the record's `source`.
    pub display_name: String,
    /// Encoded image bytes.
    pub data: Vec<u8>,
}

impl CaptureFile {
    pub fn new(display_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            display_name: display_name.into(),
            data,
        }
    }

    /// Read a screenshot from disk. The display name is the file name.
    pub fn from_path(path: &Path) -> Result<Self, ShotnoteError> {
        let data = std::fs::read(path)?;
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { display_name, data })
    }

    /// Read a screenshot from disk, keeping the file name when the read fails.
    ///
    /// An unreadable file yields empty image data, so OCR fails and the
    /// ingestion degrades to the fallback text or the file-name label.
    pub fn from_path_or_empty(path: &Path) -> Self {
        Self::from_path(path).unwrap_or_else(|e| {
            warn!(
                path = %path.display(),
                error = %e,
                "Could not read screenshot, continuing without image data"
            );
            let display_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            Self::new(display_name, Vec::new())
        })
    }
}

/// Input of one ingestion.
#[derive(Debug, Clone, Default)]
pub struct IngestRequest {
    /// Screenshot to read. `None` aborts with `NoFileSelected`.
    pub file: Option<CaptureFile>,
    /// Text used when OCR yields nothing.
    pub fallback_text: String,
}

/// Result of a successful ingestion.
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub record: CaptureRecord,
    pub text_source: TextSource,
    /// Human-readable status line, e.g. `Saved: [task] Buy milk`.
    pub status: String,
}

/// Orchestrator that turns screenshots into stored capture records.
pub struct CaptureOrchestrator<O, R> {
    ocr: O,
    repository: R,
    keywords: KeywordSets,
    title_max_words: usize,
}

impl<O: OcrService, R: CaptureRepository> CaptureOrchestrator<O, R> {
    /// Create an orchestrator with the built-in keyword sets and title length.
    pub fn new(ocr: O, repository: R) -> Self {
        Self {
            ocr,
            repository,
            keywords: KeywordSets::default(),
            title_max_words: DEFAULT_TITLE_WORDS,
        }
    }

    /// Use keyword sets and title length from the `[classifier]` section.
    pub fn with_classifier(mut self, config: &ClassifierConfig) -> Self {
        self.keywords = KeywordSets::from_config(config);
        self.title_max_words = config.title_max_words;
        self
    }

    /// Ingest a screenshot relative to the local wall clock.
    pub async fn ingest(&self, request: IngestRequest) -> Result<IngestOutcome, ShotnoteError> {
        self.ingest_at(request, Local::now()).await
    }

    /// Ingest a screenshot relative to `now`.
    ///
    /// OCR failures are logged and recovered through the fallback chain.
    /// A missing file fails before any side effect; persistence errors are
    /// returned to the caller.
    pub async fn ingest_at<Tz: TimeZone>(
        &self,
        request: IngestRequest,
        now: DateTime<Tz>,
    ) -> Result<IngestOutcome, ShotnoteError> {
        let file = request.file.ok_or(ShotnoteError::NoFileSelected)?;

        let (raw_text, text_source) = self.resolve_text(&file, &request.fallback_text).await;
        let body = normalize(&raw_text);

        let record = CaptureRecord {
            source: file.display_name,
            kind: self.keywords.classify(&body),
            title: summarize_title(&body, self.title_max_words),
            reminder_at: extract_time_hint_at(&body, &now),
            body,
            created_at: now.with_timezone(&Utc),
        };

        self.repository.append(&record)?;

        info!(
            source = %record.source,
            kind = %record.kind,
            text_source = %text_source,
            has_reminder = record.reminder_at.is_some(),
            "Capture saved"
        );

        let status = format!("Saved: [{}] {}", record.kind, record.title);
        Ok(IngestOutcome {
            record,
            text_source,
            status,
        })
    }

    /// Pick the capture text: OCR output, then fallback text, then file name.
    async fn resolve_text(&self, file: &CaptureFile, fallback_text: &str) -> (String, TextSource) {
        match self.ocr.extract_text(&file.data).await {
            Ok(text) if !text.trim().is_empty() => {
                return (text.trim().to_string(), TextSource::Ocr);
            }
            Ok(_) => debug!(source = %file.display_name, "OCR found no text"),
            Err(e) => warn!(source = %file.display_name, error = %e, "OCR failed, using fallback"),
        }

        let fallback = fallback_text.trim();
        if !fallback.is_empty() {
            return (fallback.to_string(), TextSource::Fallback);
        }
        (label_from_file_name(&file.display_name), TextSource::FileName)
    }

    /// All stored records in insertion order.
    pub fn list(&self) -> Result<Vec<CaptureRecord>, ShotnoteError> {
        self.repository.read_all()
    }

    /// Remove every stored record and return the status line.
    pub fn clear(&self) -> Result<&'static str, ShotnoteError> {
        self.repository.clear()?;
        Ok(CLEARED_STATUS)
    }

    /// Pretty JSON document of every stored record.
    pub fn export(&self) -> Result<String, ShotnoteError> {
        to_json(&self.repository.read_all()?)
    }

    /// Write every stored record to `target` (a file, or a directory that
    /// receives `captures.json`). Returns the written path and record count.
    pub fn export_to(&self, target: &Path) -> Result<(PathBuf, usize), ShotnoteError> {
        let records = self.repository.read_all()?;
        let path = write_export(target, &records)?;
        Ok((path, records.len()))
    }
}

/// User-facing status line for a failed ingestion.
pub fn status_message(err: &ShotnoteError) -> String {
    match err {
        ShotnoteError::NoFileSelected => NO_FILE_STATUS.to_string(),
        other => format!(
            "Could not read screenshot with OCR. Use fallback text. Error: {}",
            other
        ),
    }
}
