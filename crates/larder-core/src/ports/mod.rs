//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Storage is a flat key-value slot store; typed access lives in services
//! - Collaborators (recipe generation, text recognition, capture devices)
//!   report failures as values or port-specific errors, never panics

pub mod capture_device;
pub mod clock;
pub mod key_value_store;
pub mod recipe_generator;
pub mod text_recognizer;

use std::sync::Arc;
use thiserror::Error;

pub use capture_device::{CaptureDevicePort, CaptureError, CaptureSession, CaptureStream};
pub use clock::{Clock, FixedClock, SystemClock};
pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore, slots};
pub use recipe_generator::RecipeGeneratorPort;
pub use text_recognizer::{RecognitionError, TextRecognizerPort};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
#[cfg(test)]
pub use recipe_generator::MockRecipeGeneratorPort;
#[cfg(test)]
pub use text_recognizer::MockTextRecognizerPort;

/// Container for all port trait objects.
///
/// Adapters build one of these in their composition root and hand it to
/// [`crate::services::AppCore::new`]. It lives in `larder-core` so that
/// `AppCore` can accept it without depending on `larder-db`.
#[derive(Clone)]
pub struct Ports {
    /// Persistent slot storage.
    pub store: Arc<dyn KeyValueStore>,
    /// Source of "today".
    pub clock: Arc<dyn Clock>,
    /// Recipe text generation.
    pub recipes: Arc<dyn RecipeGeneratorPort>,
    /// Image-to-text recognition.
    pub recognizer: Arc<dyn TextRecognizerPort>,
}

impl Ports {
    /// Create a new Ports container.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        recipes: Arc<dyn RecipeGeneratorPort>,
        recognizer: Arc<dyn TextRecognizerPort>,
    ) -> Self {
        Self {
            store,
            clock,
            recipes,
            recognizer,
        }
    }
}

/// Domain-specific errors for storage operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Text recognition failed.
    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    /// Capture device failed.
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An identical request is already being processed.
    #[error("Busy: {0}")]
    Busy(String),

    /// The recipe collaborator reported a failure.
    #[error("Recipe generation failed: {0}")]
    RecipeGeneration(String),

    /// External service error.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
