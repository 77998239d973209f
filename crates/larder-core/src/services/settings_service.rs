//! Settings service - orchestrates settings operations.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{read_slot, write_slot};
use crate::ports::{CoreError, KeyValueStore, slots};
use crate::settings::{Settings, SettingsUpdate};

/// Service for settings operations.
pub struct SettingsService {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsService {
    /// Create a new settings service.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Get current settings. Defaults when nothing usable is stored.
    pub async fn get(&self) -> Settings {
        match read_slot::<Settings>(self.store.as_ref(), slots::SETTINGS).await {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Stored settings are unusable, using defaults");
                Settings::default()
            }
        }
    }

    /// Update settings with partial changes.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings, CoreError> {
        let mut current = self.get().await;
        current.merge(&update);
        self.save(&current).await?;
        Ok(current)
    }

    /// Switch between dark and light.
    pub async fn toggle_theme(&self) -> Result<Settings, CoreError> {
        let current = self.get().await;
        self.update(SettingsUpdate {
            theme: Some(current.theme.toggled()),
            language: None,
        })
        .await
    }

    /// Switch between English and Hindi.
    pub async fn toggle_language(&self) -> Result<Settings, CoreError> {
        let current = self.get().await;
        self.update(SettingsUpdate {
            theme: None,
            language: Some(current.language.toggled()),
        })
        .await
    }

    /// Save complete settings.
    pub async fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        write_slot(self.store.as_ref(), slots::SETTINGS, settings).await?;
        debug!(theme = %settings.theme, language = %settings.language, "Saved settings");
        Ok(())
    }
}
