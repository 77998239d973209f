//! Profile command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::ProfileCommand;
use larder_core::UserProfile;

/// Execute the profile command.
pub async fn execute(ctx: &CliContext, command: ProfileCommand) -> Result<()> {
    let service = ctx.app().profile();

    let view = match command {
        ProfileCommand::Show => service.view().await,
        ProfileCommand::Set { name, email } => service.save(UserProfile { name, email }).await?,
        ProfileCommand::Clear => service.clear().await?,
    };

    println!("name  = {}", view.name);
    println!("email = {}", view.email);
    Ok(())
}
