//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Parse CLI-specific input, call `AppCore`, format output for the terminal
//!
//! Handlers never touch storage directly and hold no business logic.

pub mod add;
pub mod list;
pub mod paths;
pub mod profile;
pub mod recipes;
pub mod remove;
pub mod scan;
pub mod settings;
pub mod web;
