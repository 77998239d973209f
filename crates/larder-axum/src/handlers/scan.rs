//! Scan handlers - interpret recognized label text.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::state::AppState;
use larder_core::{InventoryItem, ScanMode, ScanOutcome, ScanRecord};

/// Recognized text to interpret, optionally adding the result.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub text: String,
    /// `barcode`, `date` or `expiry`. Defaults to `expiry`.
    pub mode: Option<String>,
    /// When set, a found date is added to the inventory under this name.
    pub name: Option<String>,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub result: ScanOutcome,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<InventoryItem>,
}

/// Interpret text for a scan mode and record it in the scan history.
pub async fn scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, HttpError> {
    let mode = match req.mode.as_deref() {
        Some(raw) => ScanMode::parse(raw)
            .ok_or_else(|| HttpError::BadRequest(format!("Unknown scan mode: {raw}")))?,
        None => ScanMode::ExpiryDate,
    };

    let scans = state.core.scans();
    let result = scans.scan_text(&req.text, mode).await?;

    let item = match req.name.as_deref() {
        Some(name) => Some(scans.add_scanned(&result, name, &req.category).await?),
        None => None,
    };

    Ok(Json(ScanResponse {
        message: result.describe(),
        result,
        item,
    }))
}

/// Scans recorded so far, oldest first.
pub async fn history(State(state): State<AppState>) -> Json<Vec<ScanRecord>> {
    Json(state.core.scans().history().await)
}
