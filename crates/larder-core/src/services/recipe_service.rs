//! Recipe service - validation, duplicate suppression and the hand-off slot.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error, info, warn};

use super::{InventoryStore, read_slot, write_slot};
use crate::domain::{RecipeRequest, RecipeResult};
use crate::ports::{CoreError, KeyValueStore, RecipeGeneratorPort, slots};

type InFlight = Arc<Mutex<HashSet<String>>>;

/// Removes its key from the in-flight set when dropped.
struct InFlightGuard {
    in_flight: InFlight,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

/// Service for recipe generation.
pub struct RecipeService {
    generator: Arc<dyn RecipeGeneratorPort>,
    store: Arc<dyn KeyValueStore>,
    inventory: Arc<InventoryStore>,
    in_flight: InFlight,
}

impl RecipeService {
    pub fn new(
        generator: Arc<dyn RecipeGeneratorPort>,
        store: Arc<dyn KeyValueStore>,
        inventory: Arc<InventoryStore>,
    ) -> Self {
        Self {
            generator,
            store,
            inventory,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Generate recipe text for a request.
    ///
    /// Invalid requests are rejected before the collaborator is called. An
    /// identical request already in flight yields [`CoreError::Busy`].
    pub async fn request(&self, request: RecipeRequest) -> Result<String, CoreError> {
        let request = request.validated()?;
        let _guard = self.begin(request.submission_key())?;

        debug!(
            ingredients = request.ingredients.len(),
            preferences = request.preferences.len(),
            "Requesting recipe"
        );

        match self.generator.generate(&request.prompt()).await {
            RecipeResult::Success(text) => {
                info!(chars = text.len(), "Recipe generated");
                Ok(text)
            }
            RecipeResult::Failure(reason) => {
                error!(%reason, "Recipe generation failed");
                Err(CoreError::RecipeGeneration(reason))
            }
        }
    }

    /// Recipes for a single inventory item.
    pub async fn for_item(&self, id: i64) -> Result<String, CoreError> {
        let item = self.inventory.get(id).await?;
        self.request(RecipeRequest::for_ingredient(item.name)).await
    }

    /// Recipes using every item in the inventory, in display order.
    pub async fn for_collection(&self, preferences: Vec<String>) -> Result<String, CoreError> {
        let names = self
            .inventory
            .load()
            .await
            .into_iter()
            .map(|item| item.name)
            .collect();
        self.request(RecipeRequest::new(names, preferences)).await
    }

    /// Store the ingredient list handed to the recipe view.
    pub async fn select_ingredients(
        &self,
        ingredients: Vec<String>,
    ) -> Result<Vec<String>, CoreError> {
        let ingredients = RecipeRequest::new(ingredients, Vec::new())
            .validated()?
            .ingredients;
        write_slot(self.store.as_ref(), slots::RECIPE_INGREDIENTS, &ingredients).await?;
        debug!(count = ingredients.len(), "Recipe ingredients selected");
        Ok(ingredients)
    }

    /// Select a single inventory item for the recipe view.
    pub async fn select_item(&self, id: i64) -> Result<Vec<String>, CoreError> {
        let item = self.inventory.get(id).await?;
        self.select_ingredients(vec![item.name]).await
    }

    /// The ingredient list last selected. Empty when none is stored or the
    /// stored value is unreadable.
    pub async fn selected_ingredients(&self) -> Vec<String> {
        match read_slot::<Vec<String>>(self.store.as_ref(), slots::RECIPE_INGREDIENTS).await {
            Ok(selection) => selection.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Stored recipe selection is unusable, ignoring it");
                Vec::new()
            }
        }
    }

    fn begin(&self, key: String) -> Result<InFlightGuard, CoreError> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert(key.clone()) {
            return Err(CoreError::Busy(
                "An identical recipe request is already in progress".to_string(),
            ));
        }
        Ok(InFlightGuard {
            in_flight: Arc::clone(&self.in_flight),
            key,
        })
    }
}
