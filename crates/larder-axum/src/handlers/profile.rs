//! Profile handlers.

use axum::Json;
use axum::extract::State;

use crate::error::HttpError;
use crate::state::AppState;
use larder_core::{ProfileView, UserProfile};

/// The stored profile, or guest placeholders.
pub async fn get(State(state): State<AppState>) -> Json<ProfileView> {
    Json(state.core.profile().view().await)
}

/// Store a profile.
pub async fn save(
    State(state): State<AppState>,
    Json(req): Json<UserProfile>,
) -> Result<Json<ProfileView>, HttpError> {
    Ok(Json(state.core.profile().save(req).await?))
}

/// Forget the stored profile.
pub async fn clear(State(state): State<AppState>) -> Result<Json<ProfileView>, HttpError> {
    Ok(Json(state.core.profile().clear().await?))
}
