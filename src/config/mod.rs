//! Configuration module for the asset search application.

// Can all be private now because we have a public re-export.
mod debug;
mod search;

// Re-export commonly used items
pub use debug::DF;
pub use search::{SEARCH, SearchConfig};
