//! Configuration file location.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

/// Location of the `.env` file that stores user overrides.
///
/// Binaries load it with `dotenvy` after the working-directory `.env`, so
/// values set in the process environment always win.
pub fn env_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(".env"))
}
