//! Public configuration for the recipe API client.

use std::env;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "LARDER_RECIPE_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "LARDER_GEMINI_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Configuration for the recipe API client.
///
/// # Example
///
/// ```
/// use larder_gemini::GeminiClientConfig;
///
/// let config = GeminiClientConfig::new()
///     .with_model("gemini-1.5-flash")
///     .with_api_key("secret");
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// API root; requests go to `{base_url}/models/{model}:generateContent`
    pub(crate) base_url: String,
    pub(crate) model: String,
    /// Sent as the `key` query parameter. Requests fail without one.
    pub(crate) api_key: Option<String>,
    pub(crate) user_agent: String,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            user_agent: concat!("larder-gemini/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GeminiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `GEMINI_API_KEY`, `LARDER_RECIPE_MODEL` and
    /// `LARDER_GEMINI_BASE_URL` where set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        let mut config = Self::default().with_optional_api_key(var(API_KEY_ENV));
        if let Some(model) = var(MODEL_ENV) {
            config = config.with_model(model);
        }
        if let Some(base_url) = var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        config
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether an API key is configured.
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model(), "gemini-pro");
        assert!(!config.has_api_key());
        assert!(config.user_agent.starts_with("larder-gemini/"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeminiClientConfig::new()
            .with_base_url("http://localhost:8080/v1")
            .with_model("gemini-1.5-flash")
            .with_api_key("secret")
            .with_user_agent("test-agent");

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_optional_api_key() {
        let without = GeminiClientConfig::new()
            .with_api_key("secret")
            .with_optional_api_key(None);
        assert!(!without.has_api_key());
    }
}
