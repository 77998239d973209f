//! Settings handlers - theme and language.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;
use larder_core::{Settings, SettingsUpdate};

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub theme: Option<String>,
    pub language: Option<String>,
}

/// Get application settings.
pub async fn get(State(state): State<AppState>) -> Json<Settings> {
    Json(state.core.settings().get().await)
}

/// Update application settings.
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<Settings>, HttpError> {
    let update = SettingsUpdate::parse(req.theme.as_deref(), req.language.as_deref())
        .map_err(|e| HttpError::BadRequest(e.to_string()))?;
    Ok(Json(state.core.settings().update(update).await?))
}
