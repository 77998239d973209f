//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (storage, HTTP, OCR engines).
//!
//! # Structure
//!
//! - `item` - Inventory items (`InventoryItem`, `NewInventoryItem`) and the sample set
//! - `expiry` - Days-until-expiry, urgency tiers and the expiring-soon rule
//! - `view` - The classified inventory view and its aggregate notification
//! - `recipe` - Recipe requests and collaborator results
//! - `scan` - Scan modes, captured images and scan outcomes
//! - `profile` - The locally stored user profile

mod expiry;
mod item;
mod profile;
mod recipe;
mod scan;
mod view;

pub use expiry::{
    ClassifiedItem, CRITICAL_MAX_DAYS, EXPIRING_SOON_MAX_DAYS, Tier, WARNING_MAX_DAYS, days_left,
    is_expiring_soon,
};
pub use item::{InventoryItem, NewInventoryItem, next_item_id, sample_inventory};
pub use profile::{ProfileView, UserProfile};
pub use recipe::{RecipeRequest, RecipeResult};
pub use scan::{CapturedImage, ScanMode, ScanOutcome, ScanRecord};
pub use view::{ExpiryNotification, InventoryView};
