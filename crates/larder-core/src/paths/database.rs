//! Database path resolution.
//!
//! Provides the canonical path to the larder `SQLite` database file.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::data_root;

pub const DATABASE_FILE_NAME: &str = "larder.db";

/// Get the path to the larder database file under the data root.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database path under an explicit root, creating `root/data` if needed.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");

    if data_dir.exists() && !data_dir.is_dir() {
        return Err(PathError::NotADirectory(data_dir));
    }

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_path_in_creates_data_dir() {
        let root = tempdir().unwrap();
        let path = database_path_in(root.path()).unwrap();

        assert!(path.to_string_lossy().ends_with("larder.db"));
        assert!(root.path().join("data").is_dir());
    }

    #[test]
    fn test_database_path_in_rejects_file_in_the_way() {
        let root = tempdir().unwrap();
        fs::write(root.path().join("data"), b"not a dir").unwrap();

        let result = database_path_in(root.path());
        assert!(matches!(result, Err(PathError::NotADirectory(_))));
    }
}
