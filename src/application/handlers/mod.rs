//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod consensus;

pub use consensus::{
    AggregateRankingFilesCommand, AggregateRankingFilesHandler, AggregateRankingsCommand,
    AggregateRankingsHandler, AggregateRankingsOptions, AggregateRankingsResult,
};
