//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::utils::input;
use larder_core::CoreError;

/// Execute the remove command, confirming first unless `force` is set.
pub async fn execute(ctx: &CliContext, id: i64, force: bool) -> Result<()> {
    let inventory = ctx.app().inventory();

    let item = match inventory.get(id).await {
        Ok(item) => item,
        Err(CoreError::NotFound(_)) => {
            println!("No item with ID {id}.");
            println!("Use 'larder list' to see the inventory.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if !force {
        let confirm = input::prompt_confirmation(&format!(
            "Remove '{}' (expires {})?",
            item.name,
            item.expiry_date.format("%Y-%m-%d")
        ))?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    inventory.remove(id).await?;
    println!("Item removed");
    Ok(())
}
