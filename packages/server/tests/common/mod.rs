// Common test utilities

pub mod fixtures;
pub mod harness;
pub mod remote_site;

pub use fixtures::*;
pub use harness::*;
pub use remote_site::*;
