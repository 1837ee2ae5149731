//! Best-effort article text extraction.
//!
//! Fetches a page, throws away scripts, styles and site chrome, narrows to the
//! `<main>` or `<article>` region and returns a short title plus up to 4000
//! characters of heading, paragraph and list text.
//!
//! This is deliberately not an HTML parser. Everything is bounded regex
//! scanning; malformed markup degrades the output but never fails the call.
//!
//! # Usage
//!
//! ```rust,ignore
//! use content_extractor::{Extractor, FetchConfig, HttpFetcher};
//!
//! let fetcher = HttpFetcher::with_config(FetchConfig::default())?;
//! let extractor = Extractor::new(fetcher);
//! let summary = extractor.extract("https://www.nice.org.uk/guidance/ng222").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The `PageFetcher` seam
//! - [`fetchers`] - `HttpFetcher` and `MockFetcher`
//! - [`pipeline`] - Title derivation, stripping, harvesting and cleanup
//! - [`types`] - Request/result shapes and configuration

pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractionError, FetchError};
pub use fetchers::{HttpFetcher, MockFetcher};
pub use pipeline::{extract_from_html, Extractor};
pub use traits::fetcher::{FetchedPage, PageFetcher};
pub use types::{
    config::{FetchConfig, HarvestLimits, DEFAULT_USER_AGENT},
    extraction::{ExtractionRequest, ExtractionResult},
};
