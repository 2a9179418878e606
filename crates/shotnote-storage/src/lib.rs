//! Shotnote Storage crate - local key-value persistence for captures.
//!
//! Provides a SQLite-backed key-value store with migrations, the
//! CaptureRepository abstraction holding the ordered record sequence under
//! a single key, and JSON export/import of that sequence.

pub mod db;
pub mod export;
pub mod kv;
pub mod migrations;
pub mod repository;

pub use db::Database;
pub use export::{from_json, to_json, write_export, EXPORT_FILE_NAME};
pub use kv::KvStore;
pub use repository::{CaptureRepository, StoreCaptureRepository};
