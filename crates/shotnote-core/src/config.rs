use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, ShotnoteError};

/// Tokens that mark a capture as a task.
pub const DEFAULT_TASK_KEYWORDS: &[&str] = &[
    "todo", "to-do", "buy", "call", "email", "submit", "finish", "pay", "schedule", "book", "fix",
];

/// Tokens that mark a capture as a reminder when no task token is present.
pub const DEFAULT_REMINDER_KEYWORDS: &[&str] = &[
    "remind",
    "remember",
    "deadline",
    "meeting",
    "appointment",
    "tomorrow",
    "today",
    "tonight",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Key under which the whole record sequence is stored.
pub const DEFAULT_STORE_KEY: &str = "screenshot-replace-items";

/// Top-level configuration for Shotnote.
///
/// Loaded from `~/.shotnote/config.toml` by default. Every section falls back
/// to its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotnoteConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ocr: OcrSettings,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl ShotnoteConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ShotnoteConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ShotnoteError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.classifier.title_max_words == 0 {
            return Err(ShotnoteError::Config(
                "classifier.title_max_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute path of the SQLite database, with `~` expanded.
    pub fn db_path(&self) -> PathBuf {
        expand_home(&self.general.data_dir).join(&self.storage.db_file)
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding the capture store.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.shotnote/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// OCR engine selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    /// OCR engine: "tesseract" or "disabled".
    pub engine: String,
    /// Language identifier passed to the engine.
    pub language: String,
    /// Path or name of the tesseract executable.
    pub binary: String,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            engine: "tesseract".to_string(),
            language: "eng".to_string(),
            binary: "tesseract".to_string(),
        }
    }
}

/// Keyword families and title length used by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub task_keywords: Vec<String>,
    pub reminder_keywords: Vec<String>,
    /// Maximum number of words kept in a title.
    pub title_max_words: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            task_keywords: DEFAULT_TASK_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            reminder_keywords: DEFAULT_REMINDER_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            title_max_words: 8,
        }
    }
}

/// Capture store location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file name inside `general.data_dir`.
    pub db_file: String,
    /// Key holding the record sequence.
    pub store_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_file: "shotnote.db".to_string(),
            store_key: DEFAULT_STORE_KEY.to_string(),
        }
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}
