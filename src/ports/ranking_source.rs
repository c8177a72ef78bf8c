//! Ranking Source Port - Where ranking text comes from.

use crate::domain::foundation::ConsensusError;

/// Port for loading raw ranking text.
pub trait RankingSource: Send + Sync {
    /// Read the ranking text stored at `location`.
    ///
    /// # Errors
    ///
    /// Returns `ConsensusError::Source` if the text cannot be read.
    fn read(&self, location: &str) -> Result<String, ConsensusError>;
}
