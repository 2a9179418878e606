//! OCR via the `tesseract` command-line engine.
//!
//! Pipes the image bytes to `tesseract stdin stdout -l <language>` and reads
//! the recognized text from stdout. A missing executable maps to
//! `ShotnoteError::OcrUnavailable`.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use shotnote_core::error::ShotnoteError;

use crate::OcrService;

/// Configuration for the tesseract OCR service.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language identifier (e.g., "eng", "deu").
    pub language: String,
    /// Executable name or path.
    pub binary: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            binary: "tesseract".to_string(),
        }
    }
}

/// OCR service that shells out to tesseract.
pub struct TesseractOcrService {
    config: OcrConfig,
}

impl TesseractOcrService {
    /// Create a new tesseract OCR service with the given configuration.
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the OCR configuration.
    pub fn config(&self) -> &OcrConfig {
        &self.config
    }
}

impl OcrService for TesseractOcrService {
    async fn extract_text(&self, image_data: &[u8]) -> Result<String, ShotnoteError> {
        if image_data.is_empty() {
            return Err(ShotnoteError::Ocr("Empty image data".into()));
        }

        let mut child = Command::new(&self.config.binary)
            .args(["stdin", "stdout", "-l", self.config.language.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ShotnoteError::OcrUnavailable(format!(
                    "`{}` executable not found",
                    self.config.binary
                )),
                _ => ShotnoteError::Ocr(format!("Failed to start {}: {}", self.config.binary, e)),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ShotnoteError::Ocr("tesseract stdin not captured".into()))?;

        // Feed stdin concurrently with draining stdout so large images cannot
        // fill both pipes.
        let data = image_data.to_vec();
        let writer = tokio::spawn(async move {
            let result = stdin.write_all(&data).await;
            drop(stdin);
            result
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ShotnoteError::Ocr(format!("tesseract did not finish: {}", e)))?;

        if let Ok(Err(e)) = writer.await {
            debug!(error = %e, "tesseract closed stdin early");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShotnoteError::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(
            chars = text.len(),
            language = %self.config.language,
            "OCR completed"
        );
        Ok(text)
    }
}
