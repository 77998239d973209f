//! The classified inventory view.
//!
//! A pure function of the stored collection and the current date. Adapters
//! render it; nothing here is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expiry::{ClassifiedItem, EXPIRING_SOON_MAX_DAYS};
use super::item::InventoryItem;

/// The single aggregate warning raised when any item is expiring soon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryNotification {
    pub count: usize,
    pub title: String,
    pub message: String,
}

impl ExpiryNotification {
    pub const TITLE: &'static str = "Items Expiring Soon!";

    /// Build the notification for `count` expiring-soon items.
    pub fn for_count(count: usize) -> Self {
        Self {
            count,
            title: Self::TITLE.to_string(),
            message: format!(
                "You have {count} items expiring in the next {EXPIRING_SOON_MAX_DAYS} days"
            ),
        }
    }
}

/// Everything an inventory screen needs, derived in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    /// The date the classification was computed against.
    pub today: NaiveDate,
    /// Every item, classified, in insertion order.
    pub rows: Vec<ClassifiedItem>,
    /// The expiring-soon subset, in insertion order.
    pub expiring_soon: Vec<ClassifiedItem>,
    /// Present exactly when `expiring_soon` is non-empty.
    pub notification: Option<ExpiryNotification>,
}

impl InventoryView {
    /// Classify `items` against `today`.
    pub fn build(items: Vec<InventoryItem>, today: NaiveDate) -> Self {
        let rows: Vec<ClassifiedItem> = items
            .into_iter()
            .map(|item| ClassifiedItem::classify(item, today))
            .collect();

        let expiring_soon: Vec<ClassifiedItem> =
            rows.iter().filter(|row| row.expiring_soon).cloned().collect();

        let notification =
            (!expiring_soon.is_empty()).then(|| ExpiryNotification::for_count(expiring_soon.len()));

        Self {
            today,
            rows,
            expiring_soon,
            notification,
        }
    }

    /// Names of every item, in display order.
    pub fn ingredient_names(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.item.name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tier, sample_inventory};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 3).unwrap()
    }

    #[test]
    fn test_single_bread_item_raises_one_notification() {
        let items = vec![InventoryItem {
            id: 1,
            name: "Bread".to_string(),
            category: "Bakery".to_string(),
            expiry_date: today() + Duration::days(2),
        }];

        let view = InventoryView::build(items, today());

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].tier, Tier::Critical);
        assert!(view.rows[0].expiring_soon);

        let notification = view.notification.expect("notification expected");
        assert_eq!(notification.count, 1);
        assert_eq!(notification.title, "Items Expiring Soon!");
        assert_eq!(
            notification.message,
            "You have 1 items expiring in the next 3 days"
        );
    }

    #[test]
    fn test_no_notification_when_nothing_expiring() {
        let items = vec![InventoryItem {
            id: 1,
            name: "Rice".to_string(),
            category: "Pantry".to_string(),
            expiry_date: today() + Duration::days(90),
        }];

        let view = InventoryView::build(items, today());
        assert!(view.expiring_soon.is_empty());
        assert!(view.notification.is_none());
    }

    #[test]
    fn test_sample_inventory_view() {
        let view = InventoryView::build(sample_inventory(today()), today());

        let soon: Vec<&str> = view
            .expiring_soon
            .iter()
            .map(|row| row.item.name.as_str())
            .collect();
        assert_eq!(soon, vec!["Bread", "Spinach"]);
        assert_eq!(view.notification.as_ref().unwrap().count, 2);

        assert_eq!(
            view.ingredient_names(),
            vec!["Milk", "Bread", "Chicken", "Spinach", "Yogurt"]
        );
    }

    #[test]
    fn test_empty_view() {
        let view = InventoryView::build(Vec::new(), today());
        assert!(view.is_empty());
        assert!(view.notification.is_none());
    }
}
