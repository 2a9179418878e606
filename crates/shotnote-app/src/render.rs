//! Human-readable output for captures.

use std::fmt::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use shotnote_capture::IngestOutcome;
use shotnote_core::types::CaptureRecord;

/// Shown instead of a list when the store holds no captures.
pub const EMPTY_STATE: &str = "No items yet. Ingest a screenshot first.";

fn reminder_label(reminder_at: Option<DateTime<Utc>>) -> String {
    reminder_at
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "none".to_string())
}

/// Status line of a freshly saved capture followed by its details.
pub fn saved(outcome: &IngestOutcome, store: &Path) -> String {
    let record = &outcome.record;
    let mut out = String::new();
    let _ = writeln!(out, "{}", outcome.status);
    let _ = writeln!(out, "- type: {}", record.kind);
    let _ = writeln!(out, "- title: {}", record.title);
    let _ = writeln!(out, "- reminder: {}", reminder_label(record.reminder_at));
    let _ = writeln!(out, "- source: {}", record.source);
    let _ = writeln!(out, "- text from: {}", outcome.text_source);
    let _ = writeln!(out);
    let _ = write!(out, "Stored in: {}", store.display());
    out
}

/// Numbered list of captures, or the empty-state placeholder.
pub fn list(records: &[CaptureRecord], store: &Path) -> String {
    if records.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let mut out = String::new();
    let _ = write!(out, "Captured items in {}:", store.display());
    for (idx, record) in records.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. [{}] {} (reminder: {})\n   source: {}",
            idx + 1,
            record.kind,
            record.title,
            reminder_label(record.reminder_at),
            record.source
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shotnote_capture::TextSource;
    use shotnote_core::types::CaptureKind;

    fn record(title: &str, kind: CaptureKind, reminder: Option<DateTime<Utc>>) -> CaptureRecord {
        CaptureRecord {
            source: "call_bank.png".to_string(),
            kind,
            title: title.to_string(),
            body: title.to_string(),
            reminder_at: reminder,
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        assert_eq!(list(&[], Path::new("/tmp/shotnote.db")), EMPTY_STATE);
    }

    #[test]
    fn test_list_numbers_records() {
        let records = vec![
            record(
                "Call bank tomorrow",
                CaptureKind::Task,
                Some(Utc.with_ymd_and_hms(2026, 10, 20, 9, 0, 0).unwrap()),
            ),
            record("Project ideas", CaptureKind::Note, None),
        ];
        let out = list(&records, Path::new("/data/shotnote.db"));
        assert!(out.starts_with("Captured items in /data/shotnote.db:"));
        assert!(out.contains("1. [task] Call bank tomorrow (reminder: 2026-10-20T09:00:00Z)"));
        assert!(out.contains("2. [note] Project ideas (reminder: none)"));
        assert!(out.contains("   source: call_bank.png"));
    }

    #[test]
    fn test_saved_summary() {
        let outcome = IngestOutcome {
            record: record("Call bank tomorrow", CaptureKind::Task, None),
            text_source: TextSource::Fallback,
            status: "Saved: [task] Call bank tomorrow".to_string(),
        };
        let out = saved(&outcome, Path::new("/data/shotnote.db"));
        assert!(out.starts_with(
            "Saved: [task] Call bank tomorrow\n- type: task\n- title: Call bank tomorrow"
        ));
        assert!(out.contains("- reminder: none"));
        assert!(out.contains("- text from: fallback"));
        assert!(out.ends_with("Stored in: /data/shotnote.db"));
    }
}
