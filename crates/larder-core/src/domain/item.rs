//! Inventory item domain types.
//!
//! These types represent tracked food items, independent of how the
//! collection is persisted.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// A tracked food item with an assigned identifier.
///
/// Only these four fields are persisted. `daysLeft` is derived from
/// `expiry_date` at read time (see [`super::ClassifiedItem`]); payloads that
/// still carry a stored `daysLeft` are accepted and the field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Unique within the collection, assigned at creation, never changed.
    pub id: i64,
    /// Display name (non-empty).
    pub name: String,
    /// Free-text classification tag (e.g. "Dairy").
    pub category: String,
    /// Calendar expiry date, serialized as `YYYY-MM-DD`.
    pub expiry_date: NaiveDate,
}

/// An item submitted by a manual-entry or scan flow (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub expiry_date: NaiveDate,
}

impl NewInventoryItem {
    /// Create a new submission.
    pub fn new(name: impl Into<String>, category: impl Into<String>, expiry_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            expiry_date,
        }
    }

    /// Trim the text fields and reject a blank product name.
    pub fn validated(self) -> Result<Self, CoreError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Validation(
                "Product name is required".to_string(),
            ));
        }

        Ok(Self {
            name,
            category: self.category.trim().to_string(),
            expiry_date: self.expiry_date,
        })
    }

    /// Attach an identifier, producing the persisted form.
    pub fn into_item(self, id: i64) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            category: self.category,
            expiry_date: self.expiry_date,
        }
    }
}

/// Next free identifier for a collection: one past the current maximum.
pub fn next_item_id(items: &[InventoryItem]) -> i64 {
    items.iter().map(|item| item.id).max().unwrap_or(0) + 1
}

/// The fallback collection shown when nothing usable is persisted.
///
/// Expiry dates are relative to `today` so the sample always exercises
/// every tier: one critical, two warning (one of them expiring soon), two normal.
pub fn sample_inventory(today: NaiveDate) -> Vec<InventoryItem> {
    let entry = |id: i64, name: &str, category: &str, days: i64| InventoryItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        expiry_date: today + Duration::days(days),
    };

    vec![
        entry(1, "Milk", "Dairy", 12),
        entry(2, "Bread", "Bakery", 2),
        entry(3, "Chicken", "Meat", 4),
        entry(4, "Spinach", "Vegetables", 3),
        entry(5, "Yogurt", "Dairy", 7),
    ]
}
