use serde::{Deserialize, Serialize};

/// Inbound request body for an extraction.
///
/// `url` is optional at the serde level so a missing field is reported as
/// a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ExtractionRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Summary of a remote page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Short label derived from the first word of `<title>`
    pub title: String,

    /// Plain text fragments separated by blank lines, at most 4000 chars
    pub content: String,

    /// The requested URL, echoed back for correlation
    pub url: String,
}
