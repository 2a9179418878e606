use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Classification label assigned to a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureKind {
    /// Something the user has to do.
    Task,
    /// Time-bound information the user wants to be reminded of.
    Reminder,
    /// Anything else.
    Note,
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureKind::Task => write!(f, "task"),
            CaptureKind::Reminder => write!(f, "reminder"),
            CaptureKind::Note => write!(f, "note"),
        }
    }
}

impl std::str::FromStr for CaptureKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(CaptureKind::Task),
            "reminder" => Ok(CaptureKind::Reminder),
            "note" => Ok(CaptureKind::Note),
            _ => Err(format!("Unknown capture kind: {}", s)),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// One screenshot-derived record.
///
/// Records are immutable once created. The JSON shape (snake_case keys,
/// RFC 3339 instants, `null` for a missing reminder) is the persisted and
/// exported format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRecord {
    /// Display name of the screenshot the text came from.
    pub source: String,
    pub kind: CaptureKind,
    /// Bounded-length summary of `body`.
    pub title: String,
    /// Normalized full text. Never empty.
    pub body: String,
    /// Derived reminder instant, present only when a temporal hint was found.
    pub reminder_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
