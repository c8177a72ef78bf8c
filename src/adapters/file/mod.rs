//! File Adapters - Ranking text from the local filesystem.

mod file_ranking_source;

pub use file_ranking_source::FileRankingSource;
