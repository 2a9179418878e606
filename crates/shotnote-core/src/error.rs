use thiserror::Error;

/// Top-level error type for Shotnote.
///
/// Subsystem crates return this type directly so that `?` works across crate
/// boundaries without per-crate conversion layers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShotnoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("No screenshot file selected")]
    NoFileSelected,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ShotnoteError {
    fn from(err: toml::de::Error) -> Self {
        ShotnoteError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ShotnoteError {
    fn from(err: toml::ser::Error) -> Self {
        ShotnoteError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ShotnoteError {
    fn from(err: serde_json::Error) -> Self {
        ShotnoteError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Shotnote operations.
pub type Result<T> = std::result::Result<T, ShotnoteError>;
