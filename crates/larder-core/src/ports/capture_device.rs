//! Camera / capture device port.
//!
//! A device hands out a [`CaptureStream`] which holds the hardware until
//! stopped. [`CaptureSession`] wraps the stream so that it is stopped
//! exactly once whether a still is taken, the scan is cancelled, capture
//! fails, or the session is dropped mid-await.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::domain::CapturedImage;

/// Errors reported by a capture device.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Permission denied, device missing or busy.
    #[error("Capture device unavailable: {0}")]
    Unavailable(String),

    /// The device was acquired but could not produce a still.
    #[error("Capture failed: {0}")]
    Failed(String),
}

/// An acquired capture device.
#[async_trait]
pub trait CaptureStream: Send {
    /// Grab one still frame.
    async fn capture_still(&mut self) -> Result<CapturedImage, CaptureError>;

    /// Release the device. Called exactly once by [`CaptureSession`].
    fn stop(&mut self);
}

/// Something that can be asked for a capture stream.
#[async_trait]
pub trait CaptureDevicePort: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn CaptureStream>, CaptureError>;
}

/// Owns an acquired stream and releases it on every exit path.
pub struct CaptureSession {
    stream: Option<Box<dyn CaptureStream>>,
}

impl CaptureSession {
    /// Acquire the device. Nothing needs releasing if this fails.
    pub async fn open(device: &dyn CaptureDevicePort) -> Result<Self, CaptureError> {
        let stream = device.acquire().await?;
        debug!("Capture device acquired");
        Ok(Self {
            stream: Some(stream),
        })
    }

    /// Take one still, then release the device.
    pub async fn capture(mut self) -> Result<CapturedImage, CaptureError> {
        let result = match self.stream.as_mut() {
            Some(stream) => stream.capture_still().await,
            None => Err(CaptureError::Failed(
                "capture session already released".to_string(),
            )),
        };
        self.release();
        result
    }

    /// Release the device without capturing.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            debug!("Capture device released");
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStream {
        stops: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl CaptureStream for CountingStream {
        async fn capture_still(&mut self) -> Result<CapturedImage, CaptureError> {
            if self.fail {
                Err(CaptureError::Failed("no frame".to_string()))
            } else {
                Ok(CapturedImage::new(vec![1, 2, 3], "jpg"))
            }
        }

        fn stop(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct CountingDevice {
        stops: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl CaptureDevicePort for CountingDevice {
        async fn acquire(&self) -> Result<Box<dyn CaptureStream>, CaptureError> {
            Ok(Box::new(CountingStream {
                stops: Arc::clone(&self.stops),
                fail: self.fail,
            }))
        }
    }

    fn device(fail: bool) -> (CountingDevice, Arc<AtomicUsize>) {
        let stops = Arc::new(AtomicUsize::new(0));
        (
            CountingDevice {
                stops: Arc::clone(&stops),
                fail,
            },
            stops,
        )
    }

    #[tokio::test]
    async fn test_capture_releases_once() {
        let (device, stops) = device(false);
        let session = CaptureSession::open(&device).await.unwrap();
        let image = session.capture().await.unwrap();
        assert_eq!(image.bytes, vec![1, 2, 3]);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_capture_releases_once() {
        let (device, stops) = device(true);
        let session = CaptureSession::open(&device).await.unwrap();
        assert!(session.capture().await.is_err());
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_releases_once() {
        let (device, stops) = device(false);
        CaptureSession::open(&device).await.unwrap().cancel();
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_drop_releases_once() {
        let (device, stops) = device(false);
        {
            let _session = CaptureSession::open(&device).await.unwrap();
        }
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }
}
