//! Paths command handler.
//!
//! Displays resolved paths for diagnostics.

use anyhow::Result;

use larder_core::{data_root, database_path, env_file_path};

/// Print every resolved path in `key = value` form.
pub fn execute() -> Result<()> {
    println!("data_root     = {}", data_root()?.display());
    println!("database_path = {}", database_path()?.display());
    println!("env_file      = {}", env_file_path()?.display());
    Ok(())
}
