//! JSON export and re-import of the record sequence.

use std::path::{Path, PathBuf};

use tracing::info;

use shotnote_core::error::ShotnoteError;
use shotnote_core::types::CaptureRecord;

/// File name used when exporting into a directory.
pub const EXPORT_FILE_NAME: &str = "captures.json";

/// Serialize records as a pretty-printed JSON array (2-space indent).
pub fn to_json(records: &[CaptureRecord]) -> Result<String, ShotnoteError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse an exported document back into records.
pub fn from_json(json: &str) -> Result<Vec<CaptureRecord>, ShotnoteError> {
    Ok(serde_json::from_str(json)?)
}

/// Write the export document.
///
/// When `target` is an existing directory the file is named
/// [`EXPORT_FILE_NAME`] inside it; otherwise `target` is the file path.
/// Returns the path written.
pub fn write_export(target: &Path, records: &[CaptureRecord]) -> Result<PathBuf, ShotnoteError> {
    let path = if target.is_dir() {
        target.join(EXPORT_FILE_NAME)
    } else {
        target.to_path_buf()
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, to_json(records)?)?;
    info!(path = %path.display(), count = records.len(), "Captures exported");
    Ok(path)
}
