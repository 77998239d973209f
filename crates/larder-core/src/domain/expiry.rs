//! Expiry classification.
//!
//! Two groupings are derived from days-until-expiry and they are defined
//! independently: the urgency [`Tier`] (critical up to 2 days) and the
//! expiring-soon set (up to 3 days). Do not unify them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::item::InventoryItem;

/// Highest `days_left` still classified as [`Tier::Critical`].
pub const CRITICAL_MAX_DAYS: i64 = 2;

/// Highest `days_left` still classified as [`Tier::Warning`].
pub const WARNING_MAX_DAYS: i64 = 5;

/// Highest `days_left` that puts an item in the expiring-soon set.
pub const EXPIRING_SOON_MAX_DAYS: i64 = 3;

/// Urgency bucket derived from days until expiry.
///
/// Already-expired items (negative `days_left`) are `Critical`; there is
/// no separate expired tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Critical,
    Warning,
    Normal,
}

impl Tier {
    /// Map days-until-expiry to a tier. First match wins.
    #[must_use]
    pub const fn from_days_left(days_left: i64) -> Self {
        if days_left <= CRITICAL_MAX_DAYS {
            Self::Critical
        } else if days_left <= WARNING_MAX_DAYS {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// Convert tier to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Normal => "normal",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole days from `today` until `expiry`; negative once expired.
#[must_use]
pub fn days_left(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// Whether an item belongs to the expiring-soon set.
#[must_use]
pub const fn is_expiring_soon(days_left: i64) -> bool {
    days_left <= EXPIRING_SOON_MAX_DAYS
}

/// An inventory item together with everything derived from its expiry date.
///
/// Never persisted: built fresh on every read because "today" moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub days_left: i64,
    pub tier: Tier,
    pub expiring_soon: bool,
}

impl ClassifiedItem {
    /// Classify an item against the given date.
    #[must_use]
    pub fn classify(item: InventoryItem, today: NaiveDate) -> Self {
        let days_left = days_left(item.expiry_date, today);
        Self {
            item,
            days_left,
            tier: Tier::from_days_left(days_left),
            expiring_soon: is_expiring_soon(days_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 3).unwrap()
    }

    fn item_expiring_in(days: i64) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "Bread".to_string(),
            category: "Bakery".to_string(),
            expiry_date: today() + Duration::days(days),
        }
    }

    #[test]
    fn test_tier_boundaries() {
        for days in [-30, -1, 0, 1, 2] {
            assert_eq!(Tier::from_days_left(days), Tier::Critical, "days={days}");
        }
        for days in [3, 4, 5] {
            assert_eq!(Tier::from_days_left(days), Tier::Warning, "days={days}");
        }
        for days in [6, 7, 365] {
            assert_eq!(Tier::from_days_left(days), Tier::Normal, "days={days}");
        }
    }

    #[test]
    fn test_expiring_soon_is_independent_of_tier() {
        // 3 days: warning tier but still expiring soon
        assert_eq!(Tier::from_days_left(3), Tier::Warning);
        assert!(is_expiring_soon(3));

        // 4 days: warning tier and not expiring soon
        assert_eq!(Tier::from_days_left(4), Tier::Warning);
        assert!(!is_expiring_soon(4));

        assert!(is_expiring_soon(-2));
    }

    #[test]
    fn test_days_left_crosses_month_boundary() {
        let expiry = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(days_left(expiry, today()), 28);
        assert_eq!(days_left(today(), expiry), -28);
    }

    #[test]
    fn test_classify_bread_two_days_out() {
        let classified = ClassifiedItem::classify(item_expiring_in(2), today());
        assert_eq!(classified.days_left, 2);
        assert_eq!(classified.tier, Tier::Critical);
        assert!(classified.expiring_soon);
    }

    #[test]
    fn test_classified_item_serializes_flat() {
        let classified = ClassifiedItem::classify(item_expiring_in(7), today());
        let json = serde_json::to_value(&classified).unwrap();
        assert_eq!(json["name"], "Bread");
        assert_eq!(json["expiryDate"], "2025-04-10");
        assert_eq!(json["daysLeft"], 7);
        assert_eq!(json["tier"], "normal");
        assert_eq!(json["expiringSoon"], false);
    }
}
