//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `AppCore`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use larder_cli::handlers::scan::ScanArgs;
use larder_cli::{Cli, CliError, Commands, bootstrap, handlers};
use larder_core::env_file_path;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_env() {
    // Working-directory .env wins over the one in the data directory
    dotenvy::dotenv().ok();
    if let Ok(path) = env_file_path() {
        dotenvy::from_path(path).ok();
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap().await?;

    match command {
        Commands::List { soon } => handlers::list::execute(&ctx, soon).await,
        Commands::Add {
            name,
            category,
            expiry,
        } => handlers::add::execute(&ctx, &name, &category, &expiry).await,
        Commands::Remove { id, force } => handlers::remove::execute(&ctx, id, force).await,
        Commands::Recipes {
            item,
            ingredients,
            preferences,
        } => handlers::recipes::execute(&ctx, item, ingredients, preferences).await,
        Commands::Scan {
            text,
            image,
            mode,
            add,
            category,
            history,
        } => {
            let args = ScanArgs {
                text,
                image,
                mode,
                add,
                category,
                history,
            };
            handlers::scan::execute(&ctx, args).await
        }
        Commands::Settings { command } => handlers::settings::execute(&ctx, command).await,
        Commands::Profile { command } => handlers::profile::execute(&ctx, command).await,
        Commands::Paths => handlers::paths::execute(),
        Commands::Web {
            port,
            allow_origins,
        } => handlers::web::execute(port, allow_origins).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    load_env();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_err = CliError::from_anyhow(&err);
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {cli_err}");
            ExitCode::from(u8::try_from(cli_err.exit_code()).unwrap_or(1))
        }
    }
}
