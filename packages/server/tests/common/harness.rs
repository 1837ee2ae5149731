//! Test harness driving the router in-process.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no port is bound for
//! the API itself. Outbound fetches hit a `MockFetcher` unless a test builds
//! the state with a real fetcher.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use content_extractor::MockFetcher;
use serde_json::Value;
use server_core::server::{build_app, AppState};
use tower::ServiceExt;

fn init_tracing() {
    // Run tests with: RUST_LOG=debug cargo test -- --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestHarness {
    pub app: Router,
    pub fetcher: MockFetcher,
}

impl TestHarness {
    /// Harness whose fetcher knows no pages.
    pub fn new() -> Self {
        Self::with_fetcher(MockFetcher::new())
    }

    pub fn with_fetcher(fetcher: MockFetcher) -> Self {
        let app = app_with_state(AppState::new(Arc::new(fetcher.clone())), &[]);
        Self { app, fetcher }
    }

    pub async fn post_json(&self, path: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(&self.app, request).await
    }

    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        send(&self.app, request).await
    }

    /// POST `{ "url": url }` to the fetch endpoint.
    pub async fn fetch_content(&self, url: &str) -> (StatusCode, Value) {
        let body = serde_json::json!({ "url": url }).to_string();
        self.post_json("/api/fetch-content", &body).await
    }
}

/// Router over arbitrary state, with tracing initialised.
pub fn app_with_state(state: AppState, allowed_origins: &[String]) -> Router {
    init_tracing();
    build_app(state, allowed_origins)
}

/// Send a request and decode the JSON body (Null when the body is empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
