//! Settings command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::SettingsCommand;
use larder_core::{CoreError, Settings, SettingsUpdate};

fn print_settings(settings: &Settings) {
    println!("theme    = {}", settings.theme);
    println!("language = {}", settings.language.label());
}

/// Execute the settings command.
pub async fn execute(ctx: &CliContext, command: SettingsCommand) -> Result<()> {
    let service = ctx.app().settings();

    let settings = match command {
        SettingsCommand::Show => service.get().await,
        SettingsCommand::Set { theme, language } => {
            let update = SettingsUpdate::parse(theme.as_deref(), language.as_deref())
                .map_err(CoreError::from)?;
            if update.is_empty() {
                println!("Nothing to change. Use --theme and/or --language.");
                return Ok(());
            }
            service.update(update).await?
        }
        SettingsCommand::ToggleTheme => service.toggle_theme().await?,
        SettingsCommand::ToggleLanguage => service.toggle_language().await?,
    };

    print_settings(&settings);
    Ok(())
}
