//! HTTP backend abstraction for the recipe API.
//!
//! A trait-based backend allows dependency injection and easy testing.
//! The production implementation uses reqwest; requests are sent once with
//! no retry.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{GeminiError, GeminiResult};
use crate::models::error_message;

/// Trait for HTTP backends that can POST JSON and decode a JSON reply.
///
/// This is an implementation detail - external code should use the
/// `RecipeGeneratorPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> GeminiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(user_agent: &str) -> GeminiResult<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> GeminiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        // The URL carries the API key, so it is stripped from transport errors.
        let response = self
            .client
            .post(url.as_str())
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiRequestFailed {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        response
            .json()
            .await
            .map_err(|e| GeminiError::Network(e.without_url()))
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned reply for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        Json(serde_json::Value),
        Status { status: u16, body: String },
    }

    /// A fake HTTP backend that records requests and returns one canned reply.
    pub struct FakeBackend {
        response: CannedResponse,
        pub requests: Mutex<Vec<(Url, serde_json::Value)>>,
    }

    impl FakeBackend {
        pub fn new(response: CannedResponse) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json<B, T>(&self, url: &Url, body: &B) -> GeminiResult<T>
        where
            B: Serialize + Sync,
            T: DeserializeOwned + Send,
        {
            self.requests
                .lock()
                .unwrap()
                .push((url.clone(), serde_json::to_value(body)?));

            match &self.response {
                CannedResponse::Json(json) => Ok(serde_json::from_value(json.clone())?),
                CannedResponse::Status { status, body } => Err(GeminiError::ApiRequestFailed {
                    status: *status,
                    message: error_message(body),
                }),
            }
        }
    }
}
