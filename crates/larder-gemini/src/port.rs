//! Port trait implementation for `GeminiClient`.
//!
//! Every error is reported to the core as `RecipeResult::Failure`; the
//! reason text never contains the API key.

use async_trait::async_trait;
use larder_core::{RecipeGeneratorPort, RecipeResult};
use tracing::warn;

use crate::client::GeminiClient;
use crate::http::HttpBackend;

#[async_trait]
impl<B: HttpBackend> RecipeGeneratorPort for GeminiClient<B> {
    async fn generate(&self, prompt: &str) -> RecipeResult {
        match self.generate_text(prompt).await {
            Ok(text) => RecipeResult::Success(text),
            Err(e) => {
                warn!(error = %e, model = %self.config.model, "Recipe API call failed");
                RecipeResult::Failure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiClientConfig;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    fn client(response: CannedResponse) -> GeminiClient<FakeBackend> {
        GeminiClient::with_backend(
            GeminiClientConfig::new().with_api_key("k3y"),
            FakeBackend::new(response),
        )
    }

    #[tokio::test]
    async fn test_success() {
        let client = client(CannedResponse::Json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Palak Paneer" }] } }]
        })));
        assert_eq!(
            client.generate("prompt").await,
            RecipeResult::Success("Palak Paneer".to_string())
        );
    }

    #[tokio::test]
    async fn test_http_error_becomes_failure() {
        let client = client(CannedResponse::Status {
            status: 403,
            body: r#"{"error":{"message":"API key not valid"}}"#.to_string(),
        });

        let RecipeResult::Failure(reason) = client.generate("prompt").await else {
            panic!("expected failure");
        };
        assert!(reason.contains("403"));
        assert!(reason.contains("API key not valid"));
        assert!(!reason.contains("k3y"));
    }

    #[tokio::test]
    async fn test_missing_key_becomes_failure_without_request() {
        let client = GeminiClient::with_backend(
            GeminiClientConfig::new(),
            FakeBackend::new(CannedResponse::Json(json!({}))),
        );

        assert!(matches!(client.generate("prompt").await, RecipeResult::Failure(_)));
        assert!(client.backend.requests.lock().unwrap().is_empty());
    }
}
