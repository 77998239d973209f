//! Recipe handlers - free-form requests and the recipe-view selection.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::RecipeResponse;
use crate::error::HttpError;
use crate::state::AppState;
use larder_core::RecipeRequest;

/// Generate a recipe from `{ ingredients, preferences? }`.
///
/// The body is taken untyped so that a missing or malformed `ingredients`
/// field is reported with the same validation message as an empty list.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<RecipeResponse>, HttpError> {
    let request = RecipeRequest::from_json(&body)?;
    let recipe = state.core.recipes().request(request).await?;
    Ok(Json(RecipeResponse::ok(recipe)))
}

/// The ingredient list selected for the recipe view.
#[derive(Debug, Serialize, Deserialize)]
pub struct Selection {
    pub ingredients: Vec<String>,
}

/// Selection update: either explicit ingredients or an inventory item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub item_id: Option<i64>,
}

/// Read the current selection.
pub async fn selection(State(state): State<AppState>) -> Json<Selection> {
    Json(Selection {
        ingredients: state.core.recipes().selected_ingredients().await,
    })
}

/// Replace the selection.
pub async fn select(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<Selection>, HttpError> {
    let recipes = state.core.recipes();
    let ingredients = match req.item_id {
        Some(id) => recipes.select_item(id).await?,
        None => recipes.select_ingredients(req.ingredients).await?,
    };
    Ok(Json(Selection { ingredients }))
}
