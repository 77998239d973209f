//! Image-file capture device.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use larder_core::{CaptureDevicePort, CaptureError, CaptureStream, CapturedImage};
use tracing::debug;

/// A "camera" whose single frame is an image file.
#[derive(Debug, Clone)]
pub struct FileCaptureDevice {
    path: PathBuf,
}

impl FileCaptureDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CaptureDevicePort for FileCaptureDevice {
    async fn acquire(&self) -> Result<Box<dyn CaptureStream>, CaptureError> {
        let metadata = tokio::fs::metadata(&self.path).await.map_err(|e| {
            CaptureError::Unavailable(format!("{}: {e}", self.path.display()))
        })?;
        if !metadata.is_file() {
            return Err(CaptureError::Unavailable(format!(
                "{} is not a file",
                self.path.display()
            )));
        }

        Ok(Box::new(FileCaptureStream {
            path: self.path.clone(),
        }))
    }
}

struct FileCaptureStream {
    path: PathBuf,
}

#[async_trait]
impl CaptureStream for FileCaptureStream {
    async fn capture_still(&mut self) -> Result<CapturedImage, CaptureError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CaptureError::Failed(format!("{}: {e}", self.path.display())))?;
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("png")
            .to_string();

        Ok(CapturedImage::new(bytes, extension))
    }

    fn stop(&mut self) {
        debug!(path = %self.path.display(), "Released image file");
    }
}
