//! Interpretation of text returned by the recognition collaborator.
//!
//! The OCR engine itself lives behind [`crate::ports::TextRecognizerPort`];
//! this module only pattern-matches its output.

mod barcode;
mod dates;

pub use barcode::extract_barcode;
pub use dates::{DateMatch, extract_date, find_date_matches, parse_date_text};

/// Outcome of searching recognized text for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionResult {
    /// The matched date substring, verbatim.
    DateFound(String),
    /// No date-like substring. Not an error.
    NotFound,
}
