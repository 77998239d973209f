//! CLI bootstrap - the composition root.
//!
//! This module is the only place where infrastructure is wired together
//! for the CLI adapter:
//! - `SQLite` slot store (via larder-db)
//! - Recipe client (via larder-gemini)
//! - OCR engine (via larder-ocr)
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work to it.

use std::sync::Arc;

use anyhow::Result;
use larder_core::ports::{Clock, RecipeGeneratorPort, SystemClock, TextRecognizerPort};
use larder_core::{AppCore, Ports, database_path};
use larder_db::{CoreFactory, setup_database};
use larder_gemini::{DefaultGeminiClient, GeminiClientConfig};
use larder_ocr::TesseractRecognizer;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Access the `AppCore`.
    pub fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the CLI application against the on-disk database.
pub async fn bootstrap() -> Result<CliContext> {
    let db_path = database_path()?;
    tracing::debug!(database_path = %db_path.display(), "CLI bootstrap resolved paths");
    let pool = setup_database(&db_path).await?;

    let recipes: Arc<dyn RecipeGeneratorPort> =
        Arc::new(DefaultGeminiClient::new(GeminiClientConfig::from_env())?);
    let recognizer: Arc<dyn TextRecognizerPort> = Arc::new(TesseractRecognizer::from_env());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    Ok(CliContext {
        app: CoreFactory::build_app_core(pool, clock, recipes, recognizer),
    })
}

/// Bootstrap with caller-supplied ports (for testing).
pub fn bootstrap_with(ports: Ports) -> CliContext {
    CliContext {
        app: AppCore::new(ports),
    }
}
