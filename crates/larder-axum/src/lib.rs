//! HTTP adapter for larder.
//!
//! Exposes the inventory, recipe, scan, settings and profile services of
//! [`larder_core::AppCore`] as a JSON API under `/api`, plus `/health`.
//! Handlers are thin: they parse the request, call one service method and
//! map [`larder_core::CoreError`] through [`HttpError`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use chrono as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, PORT_ENV, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
