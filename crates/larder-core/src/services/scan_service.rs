//! Scan service - recognition, interpretation and the scan-session slots.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{InventoryStore, read_slot, write_slot};
use crate::domain::{
    CapturedImage, InventoryItem, NewInventoryItem, ScanMode, ScanOutcome, ScanRecord,
};
use crate::ports::{
    CaptureDevicePort, CaptureSession, CoreError, KeyValueStore, TextRecognizerPort, slots,
};
use crate::recognition::{RecognitionResult, extract_barcode, extract_date, parse_date_text};

/// Service for scanning labels.
///
/// Completed scans are appended to the `scannedItems` slot and the last
/// found date to `capturedDate`. Neither touches the inventory; adding a
/// scanned item is a separate, explicit step ([`ScanService::add_scanned`]).
pub struct ScanService {
    recognizer: Arc<dyn TextRecognizerPort>,
    store: Arc<dyn KeyValueStore>,
    inventory: Arc<InventoryStore>,
    history_lock: Mutex<()>,
}

impl ScanService {
    pub fn new(
        recognizer: Arc<dyn TextRecognizerPort>,
        store: Arc<dyn KeyValueStore>,
        inventory: Arc<InventoryStore>,
    ) -> Self {
        Self {
            recognizer,
            store,
            inventory,
            history_lock: Mutex::new(()),
        }
    }

    /// Interpret recognized text for a mode. Pure; nothing is recorded.
    pub fn interpret(text: &str, mode: ScanMode) -> ScanOutcome {
        match mode {
            ScanMode::Barcode => extract_barcode(text)
                .map_or(ScanOutcome::NotFound, |code| ScanOutcome::BarcodeFound { code }),
            ScanMode::Date | ScanMode::ExpiryDate => {
                match extract_date(text, mode == ScanMode::ExpiryDate) {
                    RecognitionResult::DateFound(found) => ScanOutcome::DateFound {
                        date: parse_date_text(&found),
                        text: found,
                    },
                    RecognitionResult::NotFound => ScanOutcome::NotFound,
                }
            }
        }
    }

    /// Interpret already-recognized text and record the result.
    pub async fn scan_text(&self, text: &str, mode: ScanMode) -> Result<ScanOutcome, CoreError> {
        let outcome = Self::interpret(text, mode);
        debug!(%mode, outcome = %outcome.describe(), "Interpreted scan text");
        self.record(mode, &outcome).await?;
        Ok(outcome)
    }

    /// Run recognition on a still image, then interpret and record.
    ///
    /// A recognition failure is returned as-is and leaves every slot untouched.
    pub async fn scan_image(
        &self,
        image: &CapturedImage,
        mode: ScanMode,
    ) -> Result<ScanOutcome, CoreError> {
        let text = self.recognizer.recognize(image).await?;
        self.scan_text(&text, mode).await
    }

    /// Acquire the device, take one still and scan it.
    ///
    /// The device is released before recognition starts, and on every
    /// failure path.
    pub async fn scan_with_device(
        &self,
        device: &dyn CaptureDevicePort,
        mode: ScanMode,
    ) -> Result<ScanOutcome, CoreError> {
        let session = CaptureSession::open(device).await?;
        let image = session.capture().await?;
        self.scan_image(&image, mode).await
    }

    /// Add an inventory item using the date from a scan.
    pub async fn add_scanned(
        &self,
        outcome: &ScanOutcome,
        name: &str,
        category: &str,
    ) -> Result<InventoryItem, CoreError> {
        let expiry = match outcome {
            ScanOutcome::DateFound {
                date: Some(date), ..
            } => *date,
            ScanOutcome::DateFound { text, date: None } => {
                return Err(CoreError::Validation(format!(
                    "'{text}' is not a valid calendar date"
                )));
            }
            _ => {
                return Err(CoreError::Validation(
                    "Scan did not find an expiry date".to_string(),
                ));
            }
        };
        self.inventory
            .add(NewInventoryItem::new(name, category, expiry))
            .await
    }

    /// Scans recorded in this session, oldest first.
    pub async fn history(&self) -> Vec<ScanRecord> {
        match read_slot::<Vec<ScanRecord>>(self.store.as_ref(), slots::SCANNED_ITEMS).await {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Stored scan history is unusable, ignoring it");
                Vec::new()
            }
        }
    }

    /// The last date text a scan found, if any.
    pub async fn captured_date(&self) -> Option<String> {
        read_slot::<String>(self.store.as_ref(), slots::CAPTURED_DATE)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Stored captured date is unusable, ignoring it");
                None
            })
    }

    async fn record(&self, mode: ScanMode, outcome: &ScanOutcome) -> Result<(), CoreError> {
        let Some(value) = outcome.value() else {
            return Ok(());
        };

        let _guard = self.history_lock.lock().await;

        // Captured date first: a failed write must not leave a history entry behind
        if let ScanOutcome::DateFound { text, .. } = outcome {
            write_slot(self.store.as_ref(), slots::CAPTURED_DATE, text).await?;
        }

        let mut records = self.history().await;
        records.push(ScanRecord {
            mode,
            value: value.to_string(),
            scanned_at: Utc::now(),
        });
        write_slot(self.store.as_ref(), slots::SCANNED_ITEMS, &records).await?;

        info!(%mode, value, "Recorded scan");
        Ok(())
    }
}
