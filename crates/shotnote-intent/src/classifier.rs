//! Keyword-based capture classification.
//!
//! Text is reduced to a set of lower-case word tokens, which are checked
//! against two keyword families. Task keywords always take precedence over
//! reminder keywords, so "call mom tomorrow" is a task.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use shotnote_core::config::{ClassifierConfig, DEFAULT_REMINDER_KEYWORDS, DEFAULT_TASK_KEYWORDS};
use shotnote_core::types::CaptureKind;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z-]+").unwrap());

static DEFAULT_SETS: LazyLock<KeywordSets> = LazyLock::new(KeywordSets::default);

/// The two keyword families used for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSets {
    task: HashSet<String>,
    reminder: HashSet<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self::new(
            DEFAULT_TASK_KEYWORDS.iter().copied(),
            DEFAULT_REMINDER_KEYWORDS.iter().copied(),
        )
    }
}

impl KeywordSets {
    /// Build keyword sets from arbitrary word lists. Words are lower-cased.
    pub fn new<T, R>(task: T, reminder: R) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self {
            task: task
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
            reminder: reminder
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Keyword sets from the `[classifier]` configuration section.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(&config.task_keywords, &config.reminder_keywords)
    }

    pub fn task(&self) -> &HashSet<String> {
        &self.task
    }

    pub fn reminder(&self) -> &HashSet<String> {
        &self.reminder
    }

    /// Classify text as task, reminder, or note.
    pub fn classify(&self, text: &str) -> CaptureKind {
        let tokens = tokenize(text);
        if tokens.iter().any(|t| self.task.contains(t)) {
            CaptureKind::Task
        } else if tokens.iter().any(|t| self.reminder.contains(t)) {
            CaptureKind::Reminder
        } else {
            CaptureKind::Note
        }
    }
}

/// Lower-case `text` and collect its runs of ASCII letters and hyphens.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Classify with the built-in keyword sets.
pub fn classify(text: &str) -> CaptureKind {
    DEFAULT_SETS.classify(text)
}
