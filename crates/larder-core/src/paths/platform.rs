//! Data root resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "LARDER_DATA_DIR";

/// Get the root directory for application data (database, `.env`).
///
/// Resolution order:
/// 1. `LARDER_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/larder`)
///
/// The directory is not created here; callers that write into it do that.
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(PathBuf::from(trimmed));
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("larder"))
}
