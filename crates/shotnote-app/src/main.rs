//! Shotnote application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing (stderr, so `--json` output stays clean)
//! 3. Open the SQLite key-value store and the capture repository
//! 4. Run the requested command through the capture orchestrator

mod cli;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, error, info, warn};

use shotnote_capture::{status_message, CaptureFile, CaptureOrchestrator, IngestRequest};
use shotnote_core::config::ShotnoteConfig;
use shotnote_core::error::ShotnoteError;
use shotnote_ocr::OcrBackend;
use shotnote_storage::{Database, KvStore, StoreCaptureRepository};

use cli::{CliArgs, Command};

type Orchestrator = CaptureOrchestrator<OcrBackend, StoreCaptureRepository>;

fn init_tracing(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file, deferring log output until tracing is up.
fn load_config(path: &Path) -> (ShotnoteConfig, Option<ShotnoteError>) {
    if !path.exists() {
        return (ShotnoteConfig::default(), None);
    }
    match ShotnoteConfig::load(path) {
        Ok(config) => (config, None),
        Err(e) => (ShotnoteConfig::default(), Some(e)),
    }
}

fn build_orchestrator(config: &ShotnoteConfig, db_path: &Path) -> Result<Orchestrator, ShotnoteError> {
    let db = Database::new(db_path)?;
    let store = KvStore::new(Arc::new(db));
    let repository = StoreCaptureRepository::new(store, config.storage.store_key.clone());
    let ocr = OcrBackend::from_settings(&config.ocr)?;
    debug!(engine = ocr.name(), language = %config.ocr.language, "OCR engine selected");
    Ok(CaptureOrchestrator::new(ocr, repository).with_classifier(&config.classifier))
}

/// Report a failed ingestion. A missing screenshot is a user mistake, not a fault.
fn report_ingest_failure(err: &ShotnoteError) {
    match err {
        ShotnoteError::NoFileSelected => warn!("Ingest requested without a screenshot"),
        other => error!(error = %other, "Ingestion failed"),
    }
    eprintln!("{}", status_message(err));
}

async fn run(command: Command, config: &ShotnoteConfig) -> Result<ExitCode, ShotnoteError> {
    let db_path = config.db_path();

    match command {
        Command::Ingest {
            screenshot,
            text,
            json,
        } => {
            // Without a screenshot nothing is opened or written.
            let Some(screenshot) = screenshot else {
                report_ingest_failure(&ShotnoteError::NoFileSelected);
                return Ok(ExitCode::FAILURE);
            };

            let orchestrator = build_orchestrator(config, &db_path)?;
            let request = IngestRequest {
                file: Some(CaptureFile::from_path_or_empty(&screenshot)),
                fallback_text: text,
            };
            match orchestrator.ingest(request).await {
                Ok(outcome) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&outcome.record)?);
                    } else {
                        println!("{}", render::saved(&outcome, &db_path));
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    report_ingest_failure(&e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::List { json } => {
            let orchestrator = build_orchestrator(config, &db_path)?;
            if json {
                println!("{}", orchestrator.export()?);
            } else {
                println!("{}", render::list(&orchestrator.list()?, &db_path));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Clear => {
            let orchestrator = build_orchestrator(config, &db_path)?;
            println!("{}", orchestrator.clear()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Export { output } => {
            let orchestrator = build_orchestrator(config, &db_path)?;
            let target = output.unwrap_or_else(|| PathBuf::from("."));
            let (path, count) = orchestrator.export_to(&target)?;
            println!("Exported {} captures to {}", count, path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let (mut config, config_error) = load_config(&config_file);
    init_tracing(&args.resolve_log_filter(&config.general.log_level));

    match config_error {
        Some(e) => warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
        None => debug!(path = %config_file.display(), "Configuration resolved"),
    }
    if let Some(data_dir) = args.resolve_data_dir() {
        config.general.data_dir = data_dir;
    }

    info!("Starting Shotnote v{}", env!("CARGO_PKG_VERSION"));

    match run(args.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> ShotnoteConfig {
        let mut config = ShotnoteConfig::default();
        config.general.data_dir = dir.join("data").to_string_lossy().to_string();
        config.ocr.engine = "disabled".to_string();
        config
    }

    #[tokio::test]
    async fn test_ingest_without_screenshot_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let command = Command::Ingest {
            screenshot: None,
            text: "Buy milk".to_string(),
            json: false,
        };
        assert!(run(command, &config).await.is_ok());
        assert!(!config.db_path().exists());
        assert!(!dir.path().join("data").exists());
    }

    #[tokio::test]
    async fn test_ingest_unreadable_screenshot_saves_fallback_text() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let command = Command::Ingest {
            screenshot: Some(dir.path().join("no_such_shot.png")),
            text: "Pay rent tomorrow".to_string(),
            json: false,
        };
        assert!(run(command, &config).await.is_ok());

        let orchestrator = build_orchestrator(&config, &config.db_path()).unwrap();
        let records = orchestrator.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, "no_such_shot.png");
        assert_eq!(records[0].body, "Pay rent tomorrow");
        assert_eq!(records[0].kind, shotnote_core::types::CaptureKind::Task);
        assert!(records[0].reminder_at.is_some());
    }

    #[tokio::test]
    async fn test_export_command_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let target = dir.path().join("out").join("shots.json");

        let command = Command::Export {
            output: Some(target.clone()),
        };
        assert!(run(command, &config).await.is_ok());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "[]");
    }
}
