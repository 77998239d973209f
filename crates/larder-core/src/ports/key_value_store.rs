//! Key-value slot storage.
//!
//! All persisted state is a handful of named slots holding JSON text. The
//! port deals in raw strings so that a corrupt slot can be detected (and
//! recovered from) by the service that owns it rather than by the backend.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::RepositoryError;

/// Names of the persisted slots.
pub mod slots {
    pub const INVENTORY: &str = "inventory";
    pub const SCANNED_ITEMS: &str = "scannedItems";
    pub const CAPTURED_DATE: &str = "capturedDate";
    pub const RECIPE_INGREDIENTS: &str = "recipeIngredients";
    pub const USER: &str = "user";
    pub const SETTINGS: &str = "settings";
}

/// Durable string storage keyed by slot name.
///
/// `set` must replace the previous value atomically: a reader sees either
/// the old value or the new one, never a partial write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. `Ok(None)` when it has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Write a slot, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;

    /// Delete a slot. Deleting an absent slot is not an error.
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    slots: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw text, bypassing any validation.
    pub fn with_slot(self, key: &str, value: impl Into<String>) -> Self {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.into());
        self
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
