//! Ranking Parser Port - Text to cluster ranking interface.
//!
//! The domain only ever sees `ClusterRanking` values; adapters (like
//! `JsonRankingParser`) decide how ranking text is written.

use crate::domain::foundation::{ConsensusError, RankingSide};
use crate::domain::ranking::ClusterRanking;

/// Port for parsing ranking text.
///
/// # Contract
///
/// Implementations must:
/// - Fail with `ConsensusError::Parse` on malformed text, never return a partial ranking
/// - Fail with `ConsensusError::UnsupportedItem` on values that are not items
/// - Tag every error with the `side` being parsed
pub trait RankingParser: Send + Sync {
    /// Parse one ranking.
    fn parse(&self, text: &str, side: RankingSide) -> Result<ClusterRanking, ConsensusError>;
}
