//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where infrastructure is wired together
//! for the web adapter: the `SQLite` slot store, the recipe client, the
//! OCR engine and the system clock.

use std::sync::Arc;

use anyhow::Result;
use larder_core::ports::{Clock, RecipeGeneratorPort, SystemClock, TextRecognizerPort};
use larder_core::{AppCore, data_root, database_path};
use larder_db::{CoreFactory, setup_database};
use larder_gemini::{DefaultGeminiClient, GeminiClientConfig};
use larder_ocr::TesseractRecognizer;

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "LARDER_PORT";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 9887;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with the default port, honouring `LARDER_PORT`.
    pub fn with_defaults() -> Result<Self> {
        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("{PORT_ENV} must be a port number, got '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            cors: CorsConfig::default(),
        })
    }

    /// Override the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap an already-composed core.
    pub fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }
}

/// Bootstrap the web adapter against the on-disk database.
pub async fn bootstrap() -> Result<AxumContext> {
    let db_path = database_path()?;
    let data_root_path = data_root()?;

    tracing::info!(
        target: "larder.paths",
        database_path = %db_path.display(),
        data_root = %data_root_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;

    let gemini_config = GeminiClientConfig::from_env();
    if !gemini_config.has_api_key() {
        tracing::warn!("No recipe API key configured; recipe requests will fail");
    }
    let recipes: Arc<dyn RecipeGeneratorPort> = Arc::new(DefaultGeminiClient::new(gemini_config)?);
    let recognizer: Arc<dyn TextRecognizerPort> = Arc::new(TesseractRecognizer::from_env());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let core = Arc::new(CoreFactory::build_app_core(pool, clock, recipes, recognizer));

    Ok(AxumContext::new(core))
}

/// Bootstrap and serve until the listener fails.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap().await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("larder web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
