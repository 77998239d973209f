//! Add command handler.

use anyhow::Result;
use chrono::NaiveDate;

use crate::bootstrap::CliContext;
use larder_core::{CoreError, NewInventoryItem, parse_date_text};

/// Accept ISO dates as well as anything a label scan would understand.
pub fn parse_expiry(raw: &str) -> Result<NaiveDate, CoreError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_date_text(raw))
        .ok_or_else(|| CoreError::Validation(format!("Unrecognized expiry date: '{raw}'")))
}

/// Execute the add command.
pub async fn execute(ctx: &CliContext, name: &str, category: &str, expiry: &str) -> Result<()> {
    let expiry_date = parse_expiry(expiry)?;
    let item = ctx
        .app()
        .inventory()
        .add(NewInventoryItem::new(name, category, expiry_date))
        .await?;

    println!(
        "Added '{}' (ID {}), expires {}",
        item.name,
        item.id,
        item.expiry_date.format("%Y-%m-%d")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiry_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        assert_eq!(parse_expiry("2025-04-15").unwrap(), expected);
        assert_eq!(parse_expiry("15/04/2025").unwrap(), expected);
        assert_eq!(parse_expiry(" 15 Apr 2025 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_expiry_rejects_garbage() {
        assert!(matches!(
            parse_expiry("next tuesday"),
            Err(CoreError::Validation(_))
        ));
    }
}
