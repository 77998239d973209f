//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod inventory_store;
mod profile_service;
mod recipe_service;
mod scan_service;
mod settings_service;

pub use app_core::AppCore;
pub use inventory_store::InventoryStore;
pub use profile_service::ProfileService;
pub use recipe_service::RecipeService;
pub use scan_service::ScanService;
pub use settings_service::SettingsService;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ports::{KeyValueStore, RepositoryError};

/// Read a JSON slot. `Ok(None)` when the slot has never been written.
async fn read_slot<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, RepositoryError> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize and write a JSON slot in one `set`.
async fn write_slot<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), RepositoryError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}
