//! Fetcher trait for retrieving remote documents.
//!
//! The extractor only needs one thing from the network: the body of a single
//! GET, or a reason it could not be had. Keeping that behind a trait lets the
//! pipeline run against canned pages in tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchResult;

/// A successfully retrieved document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL as requested
    pub url: String,

    /// URL after redirects
    pub final_url: String,

    /// HTTP status of the final response
    pub status: u16,

    /// `Content-Type` header, if the server sent one
    pub content_type: Option<String>,

    /// Response body decoded as text
    pub html: String,

    /// When the body finished downloading
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a page with a 200 status and no redirect.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            url,
            status: 200,
            content_type: None,
            html: html.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Set the final URL after redirects.
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = final_url.into();
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

/// Retrieves a single document by URL.
///
/// Implementations make exactly one attempt; retries are the caller's call.
/// Non-2xx responses must be reported as [`FetchError::Status`](crate::FetchError::Status).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url`.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Short name for logging.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        (**self).fetch(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Box<T> {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        (**self).fetch(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
