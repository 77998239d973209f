//! Command-line adapter for larder.
//!
//! `main.rs` parses arguments, bootstraps a [`CliContext`] and dispatches to
//! [`handlers`]. Everything here is a thin layer over `larder_core::AppCore`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use tempfile as _;

// Used by main.rs
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, ProfileCommand, SettingsCommand};
pub use error::CliError;
pub use parser::Cli;
