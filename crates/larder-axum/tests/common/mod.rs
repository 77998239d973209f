//! Shared fixtures for larder-axum integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use larder_axum::bootstrap::{AxumContext, CorsConfig};
use larder_axum::routes::create_router;
use larder_core::{
    AppCore, CapturedImage, FixedClock, InMemoryKeyValueStore, Ports, RecipeGeneratorPort,
    RecipeResult, RecognitionError, TextRecognizerPort,
};
use tower::ServiceExt;

/// The date every test runs against.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
}

/// Generator that echoes the prompt, or fails when built with `failing`.
#[derive(Default)]
pub struct FakeGenerator {
    fail: bool,
    pub calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeGeneratorPort for FakeGenerator {
    async fn generate(&self, prompt: &str) -> RecipeResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            RecipeResult::Failure("upstream returned 403: API key not valid".to_string())
        } else {
            RecipeResult::Success(format!("Recipe for: {prompt}"))
        }
    }
}

/// Recognizer that is never reachable over HTTP; scans arrive as text.
pub struct NoRecognizer;

#[async_trait]
impl TextRecognizerPort for NoRecognizer {
    async fn recognize(&self, _image: &CapturedImage) -> Result<String, RecognitionError> {
        Err(RecognitionError::Unavailable("not used in tests".to_string()))
    }
}

/// A router over a fresh in-memory store.
pub fn test_app(generator: Arc<FakeGenerator>) -> Router {
    let ports = Ports::new(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(FixedClock(today())),
        generator,
        Arc::new(NoRecognizer),
    );
    let ctx = AxumContext::new(Arc::new(AppCore::new(ports)));
    create_router(ctx, &CorsConfig::AllowAll)
}

/// Send one request through the router and decode the JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
