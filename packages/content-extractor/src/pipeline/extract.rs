//! End-to-end extraction: fetch, then run the markup pipeline.

use tracing::{debug, info, warn};

use crate::error::{ExtractionError, Result};
use crate::pipeline::clean::assemble;
use crate::pipeline::harvest::harvest;
use crate::pipeline::markup::{main_region, strip_non_content};
use crate::pipeline::title::derive_title;
use crate::traits::fetcher::PageFetcher;
use crate::types::config::HarvestLimits;
use crate::types::extraction::{ExtractionRequest, ExtractionResult};

/// Run the markup pipeline over an already-fetched document.
///
/// Pure: the same `html` always yields the same result.
pub fn extract_from_html(html: &str, url: &str, limits: &HarvestLimits) -> ExtractionResult {
    let title = derive_title(html);
    let stripped = strip_non_content(html);
    let region = main_region(&stripped);
    let fragments = harvest(region, limits);
    let content = assemble(fragments, limits);

    ExtractionResult {
        title,
        content,
        url: url.to_string(),
    }
}

/// Fetches a page and summarizes it.
///
/// # Example
///
/// ```rust,ignore
/// use content_extractor::{Extractor, HttpFetcher};
///
/// let extractor = Extractor::new(HttpFetcher::new()?);
/// let result = extractor.extract("https://www.nice.org.uk/guidance/ng195").await?;
/// println!("{}: {}", result.title, result.content);
/// ```
pub struct Extractor<F> {
    fetcher: F,
    limits: HarvestLimits,
}

impl<F: PageFetcher> Extractor<F> {
    /// Create an extractor with the default harvest limits.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            limits: HarvestLimits::default(),
        }
    }

    /// Override the harvest limits.
    pub fn with_limits(mut self, limits: HarvestLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate a request body and extract its URL.
    pub async fn extract_request(&self, request: &ExtractionRequest) -> Result<ExtractionResult> {
        match request.url.as_deref() {
            Some(url) => self.extract(url).await,
            None => Err(ExtractionError::UrlRequired),
        }
    }

    /// Fetch `url` once and summarize it.
    ///
    /// A blank `url` fails with [`ExtractionError::UrlRequired`] before any
    /// network activity. No retries are made.
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        if url.trim().is_empty() {
            return Err(ExtractionError::UrlRequired);
        }

        info!(url = %url, fetcher = self.fetcher.name(), "Extracting content");
        let page = self.fetcher.fetch(url).await?;
        debug!(
            url = %url,
            final_url = %page.final_url,
            status = page.status,
            content_type = page.content_type.as_deref().unwrap_or("unknown"),
            fetched_at = %page.fetched_at,
            html_bytes = page.html.len(),
            "Page fetched"
        );

        let limits = self.limits;
        let requested = url.to_string();
        let result = tokio::task::spawn_blocking(move || {
            extract_from_html(&page.html, &requested, &limits)
        })
        .await
        .map_err(|e| {
            warn!(url = %url, error = %e, "Extraction task failed");
            ExtractionError::processing(format!("content extraction task failed: {e}"))
        })?;

        debug!(
            url = %url,
            title = %result.title,
            content_chars = result.content.chars().count(),
            "Extraction complete"
        );

        Ok(result)
    }
}
