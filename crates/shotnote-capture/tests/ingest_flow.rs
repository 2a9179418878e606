//! End-to-end ingestion tests.
//!
//! Each test wires a mock OCR engine and an on-disk SQLite store into the
//! orchestrator, the same way the binary does.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use shotnote_capture::{
    CaptureFile, CaptureOrchestrator, IngestRequest, TextSource, CLEARED_STATUS,
};
use shotnote_core::types::CaptureKind;
use shotnote_ocr::MockOcrService;
use shotnote_storage::{
    from_json, CaptureRepository, Database, KvStore, StoreCaptureRepository,
};

// =============================================================================
// Helpers
// =============================================================================

const STORE_KEY: &str = "screenshot-replace-items";

fn open_repo(dir: &tempfile::TempDir) -> StoreCaptureRepository {
    let db = Database::new(&dir.path().join("shotnote.db")).unwrap();
    StoreCaptureRepository::new(KvStore::new(Arc::new(db)), STORE_KEY)
}

fn shot(name: &str, fallback: &str) -> IngestRequest {
    IngestRequest {
        file: Some(CaptureFile::new(name, b"fake image".to_vec())),
        fallback_text: fallback.to_string(),
    }
}

/// Tuesday, 2026-10-20 14:30 UTC.
fn tuesday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 20, 14, 30, 0).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn buy_milk_tomorrow_is_a_task_with_morning_reminder() {
    let dir = tempfile::tempdir().unwrap();
    let orch = CaptureOrchestrator::new(MockOcrService::with_text("Buy milk tomorrow"), open_repo(&dir));

    let outcome = orch.ingest_at(shot("milk.png", ""), tuesday()).await.unwrap();

    assert_eq!(outcome.record.kind, CaptureKind::Task);
    assert_eq!(outcome.record.title, "Buy milk tomorrow");
    assert_eq!(
        outcome.record.reminder_at,
        Some(Utc.with_ymd_and_hms(2026, 10, 21, 9, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn call_mom_tomorrow_prefers_task_over_reminder() {
    let dir = tempfile::tempdir().unwrap();
    let orch = CaptureOrchestrator::new(MockOcrService::empty(), open_repo(&dir));

    let outcome = orch
        .ingest_at(shot("chat.png", "call mom tomorrow"), tuesday())
        .await
        .unwrap();

    assert_eq!(outcome.text_source, TextSource::Fallback);
    assert_eq!(outcome.record.kind, CaptureKind::Task);
}

#[tokio::test]
async fn records_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    {
        let orch = CaptureOrchestrator::new(MockOcrService::unavailable("off"), open_repo(&dir));
        orch.ingest_at(shot("meeting.png", "Team meeting monday"), tuesday())
            .await
            .unwrap();
        orch.ingest_at(shot("brainstorm_ideas.png", ""), tuesday())
            .await
            .unwrap();
    }

    let records = open_repo(&dir).read_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind, CaptureKind::Reminder);
    assert_eq!(records[1].body, "brainstorm ideas");
    assert_eq!(records[1].kind, CaptureKind::Note);
}

#[tokio::test]
async fn export_then_import_yields_identical_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let orch = CaptureOrchestrator::new(MockOcrService::empty(), open_repo(&dir));
    for (name, text) in [
        ("a.png", "Pay rent today"),
        ("b.png", "Dentist appointment friday"),
        ("c.png", "Project ideas"),
    ] {
        orch.ingest_at(shot(name, text), tuesday()).await.unwrap();
    }

    let out_dir = tempfile::tempdir().unwrap();
    let records = orch.list().unwrap();
    let (path, count) = orch.export_to(out_dir.path()).unwrap();
    assert_eq!(count, 3);
    assert!(path.ends_with("captures.json"));

    let imported = from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(imported, records);
    assert_eq!(
        imported.iter().map(|r| r.kind).collect::<Vec<_>>(),
        vec![CaptureKind::Task, CaptureKind::Reminder, CaptureKind::Note]
    );
}

#[tokio::test]
async fn clear_empties_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let orch = CaptureOrchestrator::new(MockOcrService::with_text("Remember the deadline"), open_repo(&dir));
    orch.ingest_at(shot("d.png", ""), tuesday()).await.unwrap();

    assert_eq!(orch.clear().unwrap(), CLEARED_STATUS);
    assert!(orch.list().unwrap().is_empty());
    assert!(open_repo(&dir).read_all().unwrap().is_empty());
}
