//! Recipes command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use larder_core::RecipeRequest;

/// Execute the recipes command.
///
/// An item id asks for that item alone, explicit ingredients are sent as
/// given, and otherwise the whole inventory is used.
pub async fn execute(
    ctx: &CliContext,
    item: Option<i64>,
    ingredients: Vec<String>,
    preferences: Vec<String>,
) -> Result<()> {
    let recipes = ctx.app().recipes();

    println!("Generating recipe...");
    let recipe = match item {
        Some(id) => recipes.for_item(id).await?,
        None if ingredients.is_empty() => recipes.for_collection(preferences).await?,
        None => {
            recipes
                .request(RecipeRequest::new(ingredients, preferences))
                .await?
        }
    };

    println!();
    println!("{}", recipe.trim_end());
    Ok(())
}
