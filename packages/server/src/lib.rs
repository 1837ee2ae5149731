// Wellness Hub - API Core
//
// Backend for the wellness hub front end: the content fetch endpoint that
// summarizes external guidance pages, the knowledge catalog those pages come
// from, the ambient sound tracks, and a health check.

pub mod config;
pub mod knowledge;
pub mod server;
pub mod sounds;

pub use config::*;
