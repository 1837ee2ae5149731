//! Fetcher implementations.
//!
//! - `HttpFetcher` - single GET over `reqwest`
//! - `MockFetcher` - canned responses for testing

mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::{FetchedPage, PageFetcher};
