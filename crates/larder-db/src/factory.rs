//! Composition utilities for building `AppCore` with a `SQLite` backend.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` storage. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use larder_core::ports::{Clock, KeyValueStore, RecipeGeneratorPort, TextRecognizerPort};
use larder_core::{AppCore, Ports};

use crate::repositories::SqliteKeyValueStore;

/// Factory for creating storage instances with `SQLite` backends.
///
/// This struct provides composition utilities only - no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:/path/to/larder.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Build the slot store from a pool.
    pub fn build_store(pool: SqlitePool) -> Arc<dyn KeyValueStore> {
        Arc::new(SqliteKeyValueStore::new(pool))
    }

    /// Build a complete `AppCore` instance from a pool and collaborators.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let store = CoreFactory::build_store(pool);
    /// let core = AppCore::new(Ports::new(store, clock, recipes, recognizer));
    /// ```
    pub fn build_app_core(
        pool: SqlitePool,
        clock: Arc<dyn Clock>,
        recipes: Arc<dyn RecipeGeneratorPort>,
        recognizer: Arc<dyn TextRecognizerPort>,
    ) -> AppCore {
        let store = Self::build_store(pool);
        AppCore::new(Ports::new(store, clock, recipes, recognizer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use larder_core::{
        CapturedImage, FixedClock, NewInventoryItem, RecipeResult, RecognitionError,
    };

    struct NoRecipes;

    #[async_trait]
    impl RecipeGeneratorPort for NoRecipes {
        async fn generate(&self, _prompt: &str) -> RecipeResult {
            RecipeResult::Failure("not configured".to_string())
        }
    }

    struct NoRecognizer;

    #[async_trait]
    impl TextRecognizerPort for NoRecognizer {
        async fn recognize(&self, _image: &CapturedImage) -> Result<String, RecognitionError> {
            Err(RecognitionError::Unavailable("not configured".to_string()))
        }
    }

    #[tokio::test]
    async fn test_inventory_survives_a_new_core() {
        let pool = crate::setup_test_database().await.unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let build = |pool: SqlitePool| {
            CoreFactory::build_app_core(
                pool,
                Arc::new(FixedClock(today)),
                Arc::new(NoRecipes),
                Arc::new(NoRecognizer),
            )
        };

        let core = build(pool.clone());
        core.inventory().save(&[]).await.unwrap();
        core.inventory()
            .add(NewInventoryItem::new("Oats", "Pantry", today))
            .await
            .unwrap();

        let reopened = build(pool);
        let items = reopened.inventory().load().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Oats");
    }
}
