//! Inventory handlers - the classified view and item lifecycle.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::RecipeResponse;
use crate::error::HttpError;
use crate::state::AppState;
use larder_core::{InventoryItem, InventoryView, NewInventoryItem};

/// Confirmation returned after a removal.
#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub message: &'static str,
    /// False when the id was not in the collection.
    pub removed: bool,
}

/// Optional body for whole-collection recipe requests.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionRecipeRequest {
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// The classified inventory.
pub async fn view(State(state): State<AppState>) -> Json<InventoryView> {
    Json(state.core.inventory().view().await)
}

/// Add an item from a manual-entry form.
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<NewInventoryItem>,
) -> Result<(StatusCode, Json<InventoryItem>), HttpError> {
    let item = state.core.inventory().add(req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Remove an item. Unknown ids succeed without changing anything.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RemoveResponse>, HttpError> {
    let removed = state.core.inventory().remove(id).await?;
    Ok(Json(RemoveResponse {
        message: "Item removed",
        removed,
    }))
}

/// Recipes for a single item.
pub async fn recipes_for_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeResponse>, HttpError> {
    let recipe = state.core.recipes().for_item(id).await?;
    Ok(Json(RecipeResponse::ok(recipe)))
}

/// Recipes using every item in the collection.
pub async fn recipes_for_all(
    State(state): State<AppState>,
    body: Option<Json<CollectionRecipeRequest>>,
) -> Result<Json<RecipeResponse>, HttpError> {
    let Json(req) = body.unwrap_or_default();
    let recipe = state.core.recipes().for_collection(req.preferences).await?;
    Ok(Json(RecipeResponse::ok(recipe)))
}
