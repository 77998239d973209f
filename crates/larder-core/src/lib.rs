//! Core domain for larder, a food-inventory tracker.
//!
//! This crate owns everything that does not depend on a concrete
//! infrastructure choice:
//!
//! - `domain` - inventory items, expiry classification, the inventory view,
//!   recipe requests, scan results and the user profile
//! - `recognition` - date and barcode extraction from recognized text
//! - `ports` - traits for storage, clock and the external collaborators
//! - `services` - the store and the orchestrators adapters talk to
//! - `settings` - persisted user preferences
//! - `paths` - data directory resolution
//!
//! Adapters (`larder-db`, `larder-gemini`, `larder-ocr`, `larder-axum`,
//! `larder-cli`) depend on this crate, never the other way around.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod recognition;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CapturedImage, ClassifiedItem, ExpiryNotification, InventoryItem, InventoryView,
    NewInventoryItem, ProfileView, RecipeRequest, RecipeResult, ScanMode, ScanOutcome, ScanRecord,
    Tier, UserProfile, days_left, is_expiring_soon, sample_inventory,
};
pub use ports::{
    CaptureDevicePort, CaptureError, CaptureSession, CaptureStream, Clock, CoreError, FixedClock,
    InMemoryKeyValueStore, KeyValueStore, Ports, RecipeGeneratorPort, RecognitionError,
    RepositoryError, SystemClock, TextRecognizerPort, slots,
};
pub use recognition::{RecognitionResult, extract_barcode, extract_date, parse_date_text};
pub use services::{
    AppCore, InventoryStore, ProfileService, RecipeService, ScanService, SettingsService,
};
pub use settings::{Language, Settings, SettingsError, SettingsUpdate, Theme};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path, env_file_path};

