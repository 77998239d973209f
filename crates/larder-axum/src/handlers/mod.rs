//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers that delegate to `AppCore` services.

pub mod inventory;
pub mod profile;
pub mod recipes;
pub mod scan;
pub mod settings;

use serde::Serialize;

/// Body returned by every successful recipe request.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub success: bool,
    pub recipe: String,
}

impl RecipeResponse {
    pub const fn ok(recipe: String) -> Self {
        Self {
            success: true,
            recipe,
        }
    }
}
