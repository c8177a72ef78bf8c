//! Adapters - Implementations of port interfaces.
//!
//! - `json` - `JsonRankingParser` for JSON-array rankings
//! - `file` - `FileRankingSource` for rankings stored on disk

pub mod file;
pub mod json;

pub use file::FileRankingSource;
pub use json::JsonRankingParser;
