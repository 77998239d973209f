//! Scan domain types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// What a scan is looking for in the recognized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanMode {
    /// A product code (EAN/UPC digit run).
    Barcode,
    /// The first date in the text.
    Date,
    /// A date, preferring one labelled with an expiry keyword.
    ExpiryDate,
}

impl ScanMode {
    /// Parse a mode from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "barcode" => Some(Self::Barcode),
            "date" => Some(Self::Date),
            "expiry" | "expirydate" | "expiry-date" => Some(Self::ExpiryDate),
            _ => None,
        }
    }

    /// Convert mode to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Barcode => "barcode",
            Self::Date => "date",
            Self::ExpiryDate => "expiryDate",
        }
    }
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A still image handed to the recognition collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    /// File extension hint for engines that sniff by name (e.g. "jpg").
    pub extension: String,
}

impl CapturedImage {
    pub fn new(bytes: Vec<u8>, extension: impl Into<String>) -> Self {
        Self {
            bytes,
            extension: extension.into(),
        }
    }
}

/// Result of interpreting recognized text for a scan mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ScanOutcome {
    /// A date substring was found. `date` is `None` when the substring
    /// matched a date pattern but is not a valid calendar date.
    DateFound {
        text: String,
        date: Option<NaiveDate>,
    },
    /// A product code was found.
    BarcodeFound { code: String },
    /// Nothing matched. Not an error.
    NotFound,
}

impl ScanOutcome {
    /// The matched substring, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::DateFound { text, .. } => Some(text),
            Self::BarcodeFound { code } => Some(code),
            Self::NotFound => None,
        }
    }

    /// Short user-facing summary.
    pub fn describe(&self) -> String {
        match self {
            Self::DateFound { text, .. } => format!("Date Found: {text}"),
            Self::BarcodeFound { code } => format!("Barcode Found: {code}"),
            Self::NotFound => "No date found!".to_string(),
        }
    }
}

/// One completed scan in the scan-session list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub mode: ScanMode,
    pub value: String,
    pub scanned_at: DateTime<Utc>,
}
