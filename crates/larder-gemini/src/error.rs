//! Internal error types for recipe API operations.
//!
//! These errors are mapped to `RecipeResult::Failure` at the port boundary.

use thiserror::Error;

/// Result type alias for recipe API operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors related to the generative language API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key was configured.
    #[error("No API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    /// API request failed with an HTTP error status.
    #[error("API request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Provider message, or the raw body when it has none
        message: String,
    },

    /// API returned a response without usable text.
    #[error("Invalid response from API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = GeminiError::ApiRequestFailed {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("exhausted"));
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        assert!(GeminiError::MissingApiKey.to_string().contains("GEMINI_API_KEY"));
    }
}
