//! Shared CLI presentation utilities.
//!
//! Format-only: no domain transforms.

pub mod inventory_table;
pub mod tables;

// Re-export commonly used items
pub use inventory_table::{print_inventory, tier_marker};
pub use tables::{print_separator, truncate_string};
