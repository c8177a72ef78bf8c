//! AggregateRankingFilesHandler - Loads two rankings, then aggregates them.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::ConsensusError;
use crate::ports::RankingSource;

use super::{AggregateRankingsCommand, AggregateRankingsHandler, AggregateRankingsResult};

/// Command naming where each ranking is stored.
#[derive(Debug, Clone)]
pub struct AggregateRankingFilesCommand {
    pub location_a: String,
    pub location_b: String,
}

/// Handler that reads both rankings from a source before aggregating.
pub struct AggregateRankingFilesHandler {
    source: Arc<dyn RankingSource>,
    aggregate: AggregateRankingsHandler,
}

impl AggregateRankingFilesHandler {
    pub fn new(source: Arc<dyn RankingSource>, aggregate: AggregateRankingsHandler) -> Self {
        Self { source, aggregate }
    }

    pub fn handle(
        &self,
        cmd: AggregateRankingFilesCommand,
    ) -> Result<AggregateRankingsResult, ConsensusError> {
        let ranking_a = self.source.read(&cmd.location_a)?;
        let ranking_b = self.source.read(&cmd.location_b)?;
        debug!(
            location_a = %cmd.location_a,
            location_b = %cmd.location_b,
            "Loaded ranking texts"
        );

        self.aggregate.handle(AggregateRankingsCommand {
            ranking_a,
            ranking_b,
        })
    }
}
