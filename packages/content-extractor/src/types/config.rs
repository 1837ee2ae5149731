//! Configuration types for fetching and harvesting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// User-Agent presented to remote hosts. A desktop browser string keeps
/// bot-blocking front ends from rejecting the request outright.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Bounds applied while harvesting fragments from a page.
///
/// The defaults are observable behaviour of the fetch endpoint; change them
/// only for offline tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestLimits {
    /// Maximum `<h1>`/`<h2>` elements taken. Default: 5.
    pub max_headings: usize,

    /// Maximum `<p>` elements taken. Default: 15.
    pub max_paragraphs: usize,

    /// Maximum `<ul>`/`<ol>` blocks taken. Default: 3.
    pub max_lists: usize,

    /// Minimum run of text directly after `<p>` for the paragraph to count.
    ///
    /// Filters out short UI labels. Default: 30.
    pub min_paragraph_lead: usize,

    /// Fragments must be strictly longer than this after cleaning. Default: 10.
    pub min_fragment_chars: usize,

    /// Hard cap on the joined content, in characters. Default: 4000.
    pub max_content_chars: usize,
}

impl Default for HarvestLimits {
    fn default() -> Self {
        Self {
            max_headings: 5,
            max_paragraphs: 15,
            max_lists: 3,
            min_paragraph_lead: 30,
            min_fragment_chars: 10,
            max_content_chars: 4000,
        }
    }
}

/// Settings for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout (connect + headers + body).
    pub timeout: Duration,

    /// User-Agent header value.
    pub user_agent: String,

    /// Maximum redirects followed before giving up.
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
        }
    }
}

impl FetchConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the redirect limit.
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}
