//! Recognition and capture adapters.
//!
//! - [`TesseractRecognizer`] implements `TextRecognizerPort` by running the
//!   `tesseract` binary on a scratch copy of the image.
//! - [`FileCaptureDevice`] implements `CaptureDevicePort` over an image file
//!   on disk, for hosts without a camera (and for the CLI).

#![deny(unsafe_code)]

mod capture;
mod tesseract;

pub use capture::FileCaptureDevice;
pub use tesseract::{DEFAULT_LANGUAGE, DEFAULT_TESSERACT, TESSERACT_PATH_ENV, TesseractRecognizer};
