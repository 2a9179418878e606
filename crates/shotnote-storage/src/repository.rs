//! Capture repository.
//!
//! The whole record sequence lives as one JSON array under a single key.
//! Appends rewrite the array; clearing deletes the key.

use tracing::{debug, info};

use shotnote_core::error::ShotnoteError;
use shotnote_core::types::CaptureRecord;

use crate::kv::KvStore;

/// Ordered, append-only collection of capture records.
pub trait CaptureRepository: Send + Sync {
    /// All records in insertion order. Empty when nothing was stored.
    fn read_all(&self) -> Result<Vec<CaptureRecord>, ShotnoteError>;

    /// Append one record at the end of the sequence.
    fn append(&self, record: &CaptureRecord) -> Result<(), ShotnoteError>;

    /// Remove every record.
    fn clear(&self) -> Result<(), ShotnoteError>;
}

/// CaptureRepository persisted in a [`KvStore`] under a fixed key.
#[derive(Debug, Clone)]
pub struct StoreCaptureRepository {
    store: KvStore,
    key: String,
}

impl StoreCaptureRepository {
    pub fn new(store: KvStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The key holding the record sequence.
    pub fn key(&self) -> &str {
        &self.key
    }
}

fn decode(raw: Option<String>) -> Result<Vec<CaptureRecord>, ShotnoteError> {
    match raw {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

impl CaptureRepository for StoreCaptureRepository {
    fn read_all(&self) -> Result<Vec<CaptureRecord>, ShotnoteError> {
        let records = decode(self.store.get(&self.key)?)?;
        debug!(key = %self.key, count = records.len(), "Captures read");
        Ok(records)
    }

    fn append(&self, record: &CaptureRecord) -> Result<(), ShotnoteError> {
        self.store.update(&self.key, |current| {
            let mut records = decode(current)?;
            records.push(record.clone());
            Ok(serde_json::to_string(&records)?)
        })?;
        debug!(key = %self.key, source = %record.source, "Capture appended");
        Ok(())
    }

    fn clear(&self) -> Result<(), ShotnoteError> {
        let existed = self.store.remove(&self.key)?;
        info!(key = %self.key, existed, "Captures cleared");
        Ok(())
    }
}
