//! Extraction pipeline.
//!
//! title → strip non-content → narrow to main region → harvest → clean/join/truncate

pub mod clean;
pub mod extract;
pub mod harvest;
pub mod markup;
pub mod title;

pub use clean::{assemble, clean_fragment, truncate_chars, FRAGMENT_SEPARATOR};
pub use extract::{extract_from_html, Extractor};
pub use harvest::harvest;
pub use markup::{main_region, strip_non_content, NON_CONTENT_TAGS};
pub use title::{derive_title, DEFAULT_TITLE};
