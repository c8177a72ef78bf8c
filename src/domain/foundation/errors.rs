//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::RankingSide;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    ParseFailed,
    UnsupportedItem,
    SourceUnavailable,

    // Contract errors
    IncompleteRanking,

    // Internal errors
    DimensionMismatch,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ParseFailed => "PARSE_FAILED",
            ErrorCode::UnsupportedItem => "UNSUPPORTED_ITEM",
            ErrorCode::SourceUnavailable => "SOURCE_UNAVAILABLE",
            ErrorCode::IncompleteRanking => "INCOMPLETE_RANKING",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while reading, parsing, or aggregating cluster rankings.
///
/// Every variant is fatal: the aggregation never yields a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsensusError {
    #[error("Ranking {side} could not be parsed: {reason}")]
    Parse { side: RankingSide, reason: String },

    #[error("Ranking {side} contains an unsupported item: {value}")]
    UnsupportedItem { side: RankingSide, value: String },

    #[error("Ranking {side} does not rank item {item}")]
    IncompleteRanking { side: RankingSide, item: String },

    #[error("Dominance matrices differ in order: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Ranking source '{location}' is unavailable: {reason}")]
    Source { location: String, reason: String },
}

impl ConsensusError {
    /// Creates a parse error for one side.
    pub fn parse(side: RankingSide, reason: impl Into<String>) -> Self {
        ConsensusError::Parse {
            side,
            reason: reason.into(),
        }
    }

    /// Creates an unsupported item error for one side.
    pub fn unsupported_item(side: RankingSide, value: impl Into<String>) -> Self {
        ConsensusError::UnsupportedItem {
            side,
            value: value.into(),
        }
    }

    /// Creates an incomplete ranking error.
    pub fn incomplete_ranking(side: RankingSide, item: impl fmt::Display) -> Self {
        ConsensusError::IncompleteRanking {
            side,
            item: item.to_string(),
        }
    }

    /// Creates a source error.
    pub fn source_unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        ConsensusError::Source {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Returns the classification code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConsensusError::Parse { .. } => ErrorCode::ParseFailed,
            ConsensusError::UnsupportedItem { .. } => ErrorCode::UnsupportedItem,
            ConsensusError::IncompleteRanking { .. } => ErrorCode::IncompleteRanking,
            ConsensusError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            ConsensusError::Source { .. } => ErrorCode::SourceUnavailable,
        }
    }
}
