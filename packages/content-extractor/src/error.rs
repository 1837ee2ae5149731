//! Typed errors for the content extractor.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the HTTP boundary can
//! tell client errors apart from fetch and processing failures.

use thiserror::Error;

/// Errors that can occur while extracting content from a URL.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// No URL was supplied (or it was blank)
    #[error("URL is required")]
    UrlRequired,

    /// Retrieving the remote document failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Something unexpected happened while processing the markup
    #[error("{reason}")]
    Processing { reason: String },
}

impl ExtractionError {
    /// True when the caller is at fault and retrying the same input is pointless.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ExtractionError::UrlRequired)
    }

    pub fn processing(reason: impl Into<String>) -> Self {
        ExtractionError::Processing {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while fetching a remote page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Remote host answered with a non-2xx status
    #[error("Failed to fetch: {status_text}")]
    Status { status: u16, status_text: String },

    /// URL could not be parsed
    #[error("Failed to parse URL from {url}")]
    InvalidUrl { url: String },

    /// Request exceeded the configured timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("{0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response body could not be read
    #[error("failed to read response body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FetchError {
    /// Build a status error, using the canonical reason phrase when one exists.
    pub fn status(status: u16, reason: Option<&str>) -> Self {
        let status_text = match reason {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => status.to_string(),
        };
        FetchError::Status {
            status,
            status_text,
        }
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
