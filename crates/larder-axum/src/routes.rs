//! Route definitions and router construction.
//!
//! Handlers delegate to the services on [`larder_core::AppCore`].

use axum::Router;
use axum::routing::{delete, get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix.
///
/// The caller applies `.with_state()` before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Inventory
        .route(
            "/inventory",
            get(handlers::inventory::view).post(handlers::inventory::add),
        )
        .route("/inventory/recipes", post(handlers::inventory::recipes_for_all))
        .route("/inventory/{id}", delete(handlers::inventory::remove))
        .route(
            "/inventory/{id}/recipes",
            post(handlers::inventory::recipes_for_item),
        )
        // Recipes
        .route("/recipes", post(handlers::recipes::generate))
        .route(
            "/recipes/selection",
            get(handlers::recipes::selection).put(handlers::recipes::select),
        )
        // Scanning
        .route("/scan", post(handlers::scan::scan))
        .route("/scan/history", get(handlers::scan::history))
        // Settings
        .route(
            "/settings",
            get(handlers::settings::get).put(handlers::settings::update),
        )
        // Profile
        .route(
            "/profile",
            get(handlers::profile::get)
                .put(handlers::profile::save)
                .delete(handlers::profile::clear),
        )
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
