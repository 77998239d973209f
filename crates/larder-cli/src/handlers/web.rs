//! Web command handler.

use anyhow::Result;

use larder_axum::{ServerConfig, start_server};

/// Start the HTTP API and serve until interrupted.
pub async fn execute(port: u16, allow_origins: Vec<String>) -> Result<()> {
    let mut config = ServerConfig::with_defaults()?.with_port(port);
    if !allow_origins.is_empty() {
        config = config.with_allowed_origins(allow_origins);
    }

    println!();
    println!("  larder API listening on http://localhost:{port}/api");
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}
