//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use larder_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid input.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Requested item does not exist.
    #[error("{0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// An external collaborator (recipe API, OCR engine, camera) failed.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 1,
            CliError::Arguments(_) => 2,    // EX_USAGE
            CliError::NotFound(_) => 66,    // EX_NOINPUT
            CliError::Unavailable(_) => 69, // EX_UNAVAILABLE
            CliError::Io(_) => 74,          // EX_IOERR
            CliError::Config(_) => 78,      // EX_CONFIG
            CliError::Database(_) => 73,    // EX_CANTCREAT (closest fit)
        }
    }

    /// Classify an error returned by a handler.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(core) = err.downcast_ref::<CoreError>() {
            return Self::from_core(core);
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return CliError::Io(io.to_string());
        }
        CliError::Core(format!("{err:#}"))
    }

    fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => CliError::Database(repo_err.to_string()),
            CoreError::Settings(settings_err) => CliError::Config(settings_err.to_string()),
            CoreError::Validation(msg) => CliError::Arguments(msg.clone()),
            CoreError::NotFound(msg) => CliError::NotFound(msg.clone()),
            CoreError::Busy(msg) => CliError::Core(msg.clone()),
            CoreError::RecipeGeneration(_) => {
                CliError::Unavailable("Failed to generate recipe".to_string())
            }
            CoreError::Recognition(e) => CliError::Unavailable(e.to_string()),
            CoreError::Capture(e) => CliError::Unavailable(e.to_string()),
            CoreError::ExternalService(msg) => CliError::Unavailable(msg.clone()),
            CoreError::Internal(msg) => CliError::Core(msg.clone()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core(&err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::{RecognitionError, RepositoryError};

    #[test]
    fn test_exit_codes() {
        let cases = [
            (CoreError::Validation("x".into()), 2),
            (CoreError::NotFound("x".into()), 66),
            (CoreError::RecipeGeneration("x".into()), 69),
            (
                CoreError::Recognition(RecognitionError::Unavailable("x".into())),
                69,
            ),
            (CoreError::Repository(RepositoryError::Storage("x".into())), 73),
        ];
        for (err, code) in cases {
            assert_eq!(CliError::from(err).exit_code(), code);
        }
    }

    #[test]
    fn test_from_anyhow_finds_core_error() {
        let err = anyhow::Error::from(CoreError::Validation("Product name is required".into()));
        let cli = CliError::from_anyhow(&err);
        assert!(matches!(cli, CliError::Arguments(_)));
    }

    #[test]
    fn test_from_anyhow_fallback() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(CliError::from_anyhow(&err).exit_code(), 1);
    }
}
