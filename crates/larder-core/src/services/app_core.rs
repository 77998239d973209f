//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::ports::Ports;

use super::{InventoryStore, ProfileService, RecipeService, ScanService, SettingsService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (main.rs or bootstrap.rs) with concrete
/// implementations of the ports.
///
/// # Example
///
/// ```ignore
/// let store = larder_db::factory::build_store(&pool);
/// let ports = Ports::new(store, Arc::new(SystemClock), recipes, recognizer);
/// let core = AppCore::new(ports);
///
/// // Access services
/// let view = core.inventory().view().await;
/// ```
pub struct AppCore {
    inventory: Arc<InventoryStore>,
    recipes: RecipeService,
    scans: ScanService,
    settings: SettingsService,
    profile: ProfileService,
}

impl AppCore {
    /// Create a new `AppCore` wired to the given ports.
    pub fn new(ports: Ports) -> Self {
        let inventory = Arc::new(InventoryStore::new(
            Arc::clone(&ports.store),
            Arc::clone(&ports.clock),
        ));

        Self {
            recipes: RecipeService::new(
                ports.recipes,
                Arc::clone(&ports.store),
                Arc::clone(&inventory),
            ),
            scans: ScanService::new(
                ports.recognizer,
                Arc::clone(&ports.store),
                Arc::clone(&inventory),
            ),
            settings: SettingsService::new(Arc::clone(&ports.store)),
            profile: ProfileService::new(ports.store),
            inventory,
        }
    }

    /// Access the inventory store.
    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    /// Access the recipe service.
    pub const fn recipes(&self) -> &RecipeService {
        &self.recipes
    }

    /// Access the scan service.
    pub const fn scans(&self) -> &ScanService {
        &self.scans
    }

    /// Access the settings service.
    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }

    /// Access the profile service.
    pub const fn profile(&self) -> &ProfileService {
        &self.profile
    }
}
