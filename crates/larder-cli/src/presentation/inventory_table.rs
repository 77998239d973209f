//! Inventory table rendering.

use larder_core::{ClassifiedItem, InventoryView, Tier};

use super::{print_separator, truncate_string};

/// Short marker shown in the tier column.
pub const fn tier_marker(tier: Tier) -> &'static str {
    match tier {
        Tier::Critical => "!!",
        Tier::Warning => "! ",
        Tier::Normal => "  ",
    }
}

fn days_label(days_left: i64) -> String {
    match days_left {
        d if d < 0 => format!("expired {}d ago", -d),
        0 => "today".to_string(),
        1 => "1 day".to_string(),
        d => format!("{d} days"),
    }
}

fn print_rows(rows: &[ClassifiedItem]) {
    println!(
        "{:<4} {:<2} {:<24} {:<14} {:<11} Left",
        "ID", "", "Name", "Category", "Expiry"
    );
    print_separator(72);

    for row in rows {
        println!(
            "{:<4} {:<2} {:<24} {:<14} {:<11} {}",
            row.item.id,
            tier_marker(row.tier),
            truncate_string(&row.item.name, 23),
            truncate_string(&row.item.category, 13),
            row.item.expiry_date.format("%Y-%m-%d"),
            days_label(row.days_left),
        );
    }
}

/// Print the classified inventory, or only the expiring-soon subset.
pub fn print_inventory(view: &InventoryView, soon_only: bool) {
    if let Some(notification) = &view.notification {
        println!("{}", notification.title);
        println!("{}", notification.message);
        println!();
    }

    let rows = if soon_only {
        &view.expiring_soon
    } else {
        &view.rows
    };

    if rows.is_empty() {
        if soon_only {
            println!("Nothing expires in the next few days.");
        } else {
            println!("Your inventory is empty.");
            println!("Use 'larder add <name> --expiry <date>' to add an item.");
        }
        return;
    }

    print_rows(rows);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_label() {
        assert_eq!(days_label(-2), "expired 2d ago");
        assert_eq!(days_label(0), "today");
        assert_eq!(days_label(1), "1 day");
        assert_eq!(days_label(12), "12 days");
    }

    #[test]
    fn test_tier_marker() {
        assert_eq!(tier_marker(Tier::Critical), "!!");
        assert_eq!(tier_marker(Tier::Normal).trim(), "");
    }
}
