//! Text recognition (OCR) port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CapturedImage;

/// Errors reported by a text recognition backend.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// The engine could not be started (missing binary, bad path).
    #[error("Recognition engine unavailable: {0}")]
    Unavailable(String),

    /// The engine ran but reported a failure.
    #[error("Recognition failed: {0}")]
    Failed(String),
}

/// Extracts plain text from a still image.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextRecognizerPort: Send + Sync {
    /// Recognize text in the image. An image with no text yields `Ok("")`.
    async fn recognize(&self, image: &CapturedImage) -> Result<String, RecognitionError>;
}
