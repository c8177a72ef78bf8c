//! Consensus handlers.
//!
//! Commands that parse ranking input and run the aggregation pipeline.

mod aggregate_ranking_files;
mod aggregate_rankings;

pub use aggregate_ranking_files::{AggregateRankingFilesCommand, AggregateRankingFilesHandler};
pub use aggregate_rankings::{
    AggregateRankingsCommand, AggregateRankingsHandler, AggregateRankingsOptions,
    AggregateRankingsResult,
};
