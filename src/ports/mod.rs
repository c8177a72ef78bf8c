//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RankingParser` - Turns ranking text into a `ClusterRanking`
//! - `RankingSource` - Loads ranking text from a location

mod ranking_parser;
mod ranking_source;

pub use ranking_parser::RankingParser;
pub use ranking_source::RankingSource;
