//! Mock fetcher for testing.
//!
//! Serves canned pages keyed by URL and records every URL it was asked for,
//! so tests can assert that no fetch happened at all.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{FetchedPage, PageFetcher};

#[derive(Debug, Clone)]
enum MockResponse {
    Page(FetchedPage),
    Status(u16, Option<&'static str>),
}

/// Mock fetcher for testing.
///
/// URLs with no canned response answer `404 Not Found`.
///
/// # Example
///
/// ```rust
/// use content_extractor::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_html("https://example.com", "<title>Hello</title>")
///     .with_status("https://example.com/gone", 410);
/// assert_eq!(mock.call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `page` for its URL.
    pub fn add_page(&self, page: FetchedPage) {
        let mut responses = self.responses.write().unwrap();
        responses.insert(page.url.clone(), MockResponse::Page(page));
    }

    /// Serve `html` with a 200 status for `url` (builder pattern).
    pub fn with_html(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(FetchedPage::new(url, html));
        self
    }

    /// Serve a fully specified page (builder pattern).
    pub fn with_page(self, page: FetchedPage) -> Self {
        self.add_page(page);
        self
    }

    /// Answer `url` with a non-2xx status (builder pattern).
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), MockResponse::Status(status, reason_phrase(status)));
        self
    }

    /// Number of fetches performed.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// URLs requested, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

fn reason_phrase(status: u16) -> Option<&'static str> {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        self.calls.write().unwrap().push(url.to_string());

        let responses = self.responses.read().unwrap();
        match responses.get(url) {
            Some(MockResponse::Page(page)) => Ok(page.clone()),
            Some(MockResponse::Status(status, reason)) => Err(FetchError::status(*status, *reason)),
            None => Err(FetchError::status(404, Some("Not Found"))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
