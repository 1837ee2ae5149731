//! HTTP-based fetcher implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{FetchedPage, PageFetcher};
use crate::types::config::FetchConfig;

/// Fetcher that issues a single GET through `reqwest`.
///
/// # Example
///
/// ```rust,ignore
/// use content_extractor::{FetchConfig, HttpFetcher, PageFetcher};
///
/// let fetcher = HttpFetcher::with_config(FetchConfig::new().with_timeout(Duration::from_secs(10)))?;
/// let page = fetcher.fetch("https://www.nice.org.uk/guidance/ng222").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Create a fetcher with default settings.
    pub fn new() -> FetchResult<Self> {
        Self::with_config(FetchConfig::default())
    }

    /// Create a fetcher from explicit settings.
    pub fn with_config(config: FetchConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Client(Box::new(e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

fn send_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http(Box::new(e))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        let parsed = reqwest::Url::parse(url).map_err(|_| FetchError::InvalidUrl {
            url: url.to_string(),
        })?;

        debug!(url = %url, "HTTP fetch starting");
        let response = self.client.get(parsed).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            send_error(url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Remote host returned an error status");
            return Err(FetchError::status(status.as_u16(), status.canonical_reason()));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body(Box::new(e))
            }
        })?;

        debug!(
            url = %url,
            final_url = %final_url,
            content_length = html.len(),
            "HTTP fetch complete"
        );

        let mut page = FetchedPage::new(url, html)
            .with_final_url(final_url)
            .with_status(status.as_u16());
        if let Some(ct) = content_type {
            page = page.with_content_type(ct);
        }

        Ok(page)
    }

    fn name(&self) -> &str {
        "http"
    }
}
