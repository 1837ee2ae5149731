// HTTP routes
pub mod fetch_content;
pub mod health;
pub mod knowledge;
pub mod sounds;

pub use fetch_content::*;
pub use health::*;
pub use knowledge::*;
pub use sounds::*;
