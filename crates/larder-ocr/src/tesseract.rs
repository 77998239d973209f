//! `tesseract` process adapter.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use larder_core::{CapturedImage, RecognitionError, TextRecognizerPort};
use tokio::process::Command;
use tracing::{debug, warn};

/// Environment variable overriding the tesseract binary.
pub const TESSERACT_PATH_ENV: &str = "LARDER_TESSERACT_PATH";
pub const DEFAULT_TESSERACT: &str = "tesseract";
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Runs `tesseract <image> stdout -l <lang>` and returns stdout.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    binary: PathBuf,
    language: String,
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_TESSERACT)
    }
}

impl TesseractRecognizer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Binary from `LARDER_TESSERACT_PATH`, else `tesseract` on `PATH`.
    pub fn from_env() -> Self {
        env::var(TESSERACT_PATH_ENV)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command_args(&self, image: &Path) -> Vec<OsString> {
        vec![
            image.as_os_str().to_os_string(),
            "stdout".into(),
            "-l".into(),
            self.language.clone().into(),
        ]
    }

    /// Recognize text in an image that is already on disk.
    pub async fn recognize_path(&self, image: &Path) -> Result<String, RecognitionError> {
        debug!(binary = %self.binary.display(), image = %image.display(), "Running tesseract");

        let output = Command::new(&self.binary)
            .args(self.command_args(image))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                RecognitionError::Unavailable(format!("{}: {e}", self.binary.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "tesseract failed");
            return Err(RecognitionError::Failed(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(chars = text.len(), "tesseract finished");
        Ok(text)
    }
}

#[async_trait]
impl TextRecognizerPort for TesseractRecognizer {
    async fn recognize(&self, image: &CapturedImage) -> Result<String, RecognitionError> {
        let scratch = tempfile::Builder::new()
            .prefix("larder-scan-")
            .suffix(&format!(".{}", image.extension))
            .tempfile()
            .map_err(|e| RecognitionError::Failed(format!("cannot create scratch file: {e}")))?;

        tokio::fs::write(scratch.path(), &image.bytes)
            .await
            .map_err(|e| RecognitionError::Failed(format!("cannot write scratch file: {e}")))?;

        // `scratch` is deleted when it goes out of scope, after the process exits.
        self.recognize_path(scratch.path()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args() {
        let recognizer = TesseractRecognizer::default().with_language("hin");
        let args = recognizer.command_args(Path::new("/tmp/label.jpg"));
        assert_eq!(args, vec!["/tmp/label.jpg", "stdout", "-l", "hin"]);
    }

    #[tokio::test]
    async fn test_missing_binary_is_unavailable() {
        let recognizer = TesseractRecognizer::new("/nonexistent/larder/tesseract");
        let result = recognizer
            .recognize(&CapturedImage::new(vec![0], "jpg"))
            .await;
        assert!(matches!(result, Err(RecognitionError::Unavailable(_))));
    }

    // `sh <image> stdout -l eng` runs the "image" as a script, which stands
    // in for an OCR engine printing recognized text.
    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_recognized_text() {
        let recognizer = TesseractRecognizer::new("sh");
        let image = CapturedImage::new(b"echo 'Best Before: 15/04/2025'\n".to_vec(), "sh");

        let text = recognizer.recognize(&image).await.unwrap();
        assert_eq!(text.trim(), "Best Before: 15/04/2025");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let recognizer = TesseractRecognizer::new("sh");
        let image = CapturedImage::new(b"echo 'bad image' >&2\nexit 3\n".to_vec(), "sh");

        let result = recognizer.recognize(&image).await;
        let Err(RecognitionError::Failed(message)) = result else {
            panic!("expected failure, got {result:?}");
        };
        assert!(message.contains("bad image"));
    }
}
