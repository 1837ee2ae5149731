//! Value types that cross the extractor boundary.

pub mod config;
pub mod extraction;
