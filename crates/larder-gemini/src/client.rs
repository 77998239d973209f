//! Client for the `generateContent` endpoint.

use tracing::debug;
use url::Url;

use crate::config::GeminiClientConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{GenerateContentRequest, GenerateContentResponse};

/// Default client using the reqwest HTTP backend.
pub type DefaultGeminiClient = GeminiClient<ReqwestBackend>;

/// Client generic over its HTTP backend so tests can inject a fake.
pub struct GeminiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: GeminiClientConfig,
}

impl DefaultGeminiClient {
    /// Create a new client with the given configuration.
    ///
    /// A missing API key is not an error here; each request then reports it.
    pub fn new(config: GeminiClientConfig) -> Result<Self, GeminiError> {
        let backend = ReqwestBackend::new(&config.user_agent)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> GeminiClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: GeminiClientConfig, backend: B) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &GeminiClientConfig {
        &self.config
    }

    /// `{base}/models/{model}:generateContent?key=...`
    pub(crate) fn generate_url(&self) -> GeminiResult<Url> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingApiKey)?;
        let base = self.config.base_url.trim_end_matches('/');

        let mut url = Url::parse(&format!(
            "{base}/models/{}:generateContent",
            self.config.model
        ))?;
        url.query_pairs_mut().append_pair("key", key);
        Ok(url)
    }

    /// Send a prompt and return the generated text.
    pub(crate) async fn generate_text(&self, prompt: &str) -> GeminiResult<String> {
        let url = self.generate_url()?;
        debug!(model = %self.config.model, prompt_chars = prompt.len(), "Sending generateContent request");

        let response: GenerateContentResponse = self
            .backend
            .post_json(&url, &GenerateContentRequest::from_prompt(prompt))
            .await?;

        response.text().ok_or_else(|| GeminiError::InvalidResponse {
            message: match response.finish_reason() {
                Some(reason) => format!("no text in response (finish reason {reason})"),
                None => "no text in response".to_string(),
            },
        })
    }
}
