//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_inventory;

/// Print the classified inventory.
pub async fn execute(ctx: &CliContext, soon: bool) -> Result<()> {
    let view = ctx.app().inventory().view().await;
    print_inventory(&view, soon);
    Ok(())
}
