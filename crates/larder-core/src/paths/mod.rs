//! Path utilities for larder data directories.
//!
//! This module provides the canonical path resolution for all larder components:
//! - Data root (`LARDER_DATA_DIR` or the OS data directory)
//! - Database location
//! - The `.env` override file
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod config;
mod database;
mod error;
mod platform;

pub use config::env_file_path;
pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
