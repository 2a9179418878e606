//! Shotnote OCR crate - OCR capability trait and implementations.
//!
//! Provides the OcrService trait for text extraction from screenshots,
//! a TesseractOcrService backed by the `tesseract` command-line engine,
//! a DisabledOcrService for setups without OCR, and a MockOcrService for
//! testing the capture pipeline.

pub mod tesseract;

use shotnote_core::config::OcrSettings;
use shotnote_core::error::ShotnoteError;

pub use tesseract::{OcrConfig, TesseractOcrService};

/// Service for extracting text from screenshot images.
///
/// Implementations wrap an OCR engine behind a uniform async interface.
/// Callers treat every error as recoverable and fall back to other text.
pub trait OcrService: Send + Sync {
    /// Extract text from encoded image bytes (PNG, JPEG, BMP, ...).
    ///
    /// # Returns
    /// The recognized text. May be empty if no text is detected.
    ///
    /// # Errors
    /// `ShotnoteError::OcrUnavailable` when no engine can be reached,
    /// `ShotnoteError::Ocr` when recognition itself fails.
    fn extract_text(
        &self,
        image_data: &[u8],
    ) -> impl std::future::Future<Output = Result<String, ShotnoteError>> + Send;
}

/// OCR service used when OCR is turned off in configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledOcrService;

impl OcrService for DisabledOcrService {
    async fn extract_text(&self, _image_data: &[u8]) -> Result<String, ShotnoteError> {
        Err(ShotnoteError::OcrUnavailable(
            "OCR is disabled in configuration".to_string(),
        ))
    }
}

/// OCR engine chosen from the `[ocr]` configuration section.
pub enum OcrBackend {
    Tesseract(TesseractOcrService),
    Disabled(DisabledOcrService),
}

impl OcrBackend {
    /// Select the engine named by `settings.engine`.
    ///
    /// Unknown engine names are a configuration error.
    pub fn from_settings(settings: &OcrSettings) -> Result<Self, ShotnoteError> {
        match settings.engine.trim().to_ascii_lowercase().as_str() {
            "tesseract" => Ok(OcrBackend::Tesseract(TesseractOcrService::new(OcrConfig {
                language: settings.language.clone(),
                binary: settings.binary.clone(),
            }))),
            "disabled" | "none" | "off" => Ok(OcrBackend::Disabled(DisabledOcrService)),
            other => Err(ShotnoteError::Config(format!(
                "Unknown OCR engine `{}`; expected tesseract|disabled",
                other
            ))),
        }
    }

    /// Short engine name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            OcrBackend::Tesseract(_) => "tesseract",
            OcrBackend::Disabled(_) => "disabled",
        }
    }
}

impl OcrService for OcrBackend {
    async fn extract_text(&self, image_data: &[u8]) -> Result<String, ShotnoteError> {
        match self {
            OcrBackend::Tesseract(service) => service.extract_text(image_data).await,
            OcrBackend::Disabled(service) => service.extract_text(image_data).await,
        }
    }
}

/// Mock OCR service for testing.
///
/// Returns deterministic output without performing real OCR.
#[derive(Debug, Clone)]
pub struct MockOcrService {
    response: Result<String, String>,
}

impl MockOcrService {
    /// Create a mock OCR service that returns the specified text.
    pub fn with_text(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
        }
    }

    /// Create a mock OCR service that returns empty text (no text found).
    pub fn empty() -> Self {
        Self::with_text("")
    }

    /// Create a mock OCR service whose engine is unavailable.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
        }
    }
}

impl OcrService for MockOcrService {
    async fn extract_text(&self, image_data: &[u8]) -> Result<String, ShotnoteError> {
        if image_data.is_empty() {
            return Err(ShotnoteError::Ocr("Empty image data".to_string()));
        }
        self.response
            .clone()
            .map_err(ShotnoteError::OcrUnavailable)
    }
}
