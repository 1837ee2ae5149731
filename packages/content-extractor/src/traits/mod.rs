//! Core trait abstractions for the extractor.

pub mod fetcher;
