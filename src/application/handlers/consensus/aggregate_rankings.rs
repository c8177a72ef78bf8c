//! AggregateRankingsHandler - Command handler for aggregating two rankings.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::analysis::{
    ConsensusAggregator, ConsensusResult, ConsensusSummary, IntransitiveTriple,
};
use crate::domain::foundation::{ConsensusError, RankingSide};
use crate::ports::RankingParser;

/// Command to aggregate two rankings given as text.
#[derive(Debug, Clone)]
pub struct AggregateRankingsCommand {
    pub ranking_a: String,
    pub ranking_b: String,
}

/// Handler options.
#[derive(Debug, Clone, Copy)]
pub struct AggregateRankingsOptions {
    /// Run the comparator cycle audit after ordering.
    pub audit_transitivity: bool,
}

impl Default for AggregateRankingsOptions {
    fn default() -> Self {
        Self {
            audit_transitivity: true,
        }
    }
}

/// Result of a successful aggregation.
#[derive(Debug, Clone)]
pub struct AggregateRankingsResult {
    pub result: ConsensusResult,
    pub summary: ConsensusSummary,
    /// Comparator cycles found by the audit; empty when the audit is off.
    pub intransitive_triples: Vec<IntransitiveTriple>,
}

impl AggregateRankingsResult {
    /// Renders the published JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.result.to_json()
    }
}

/// Handler for aggregating rankings.
pub struct AggregateRankingsHandler {
    parser: Arc<dyn RankingParser>,
    options: AggregateRankingsOptions,
}

impl AggregateRankingsHandler {
    pub fn new(parser: Arc<dyn RankingParser>, options: AggregateRankingsOptions) -> Self {
        Self { parser, options }
    }

    pub fn handle(
        &self,
        cmd: AggregateRankingsCommand,
    ) -> Result<AggregateRankingsResult, ConsensusError> {
        // 1. Parse both sides; nothing is computed on a parse failure
        let ranking_a = self.parser.parse(&cmd.ranking_a, RankingSide::A)?;
        let ranking_b = self.parser.parse(&cmd.ranking_b, RankingSide::B)?;
        debug!(
            positions_a = ranking_a.len(),
            positions_b = ranking_b.len(),
            "Parsed rankings"
        );

        // 2. Run the pipeline
        let analysis = ConsensusAggregator::analyze(&ranking_a, &ranking_b)?;

        // 3. Audit the comparator
        let intransitive_triples = if self.options.audit_transitivity {
            analysis.intransitive_triples()
        } else {
            Vec::new()
        };
        if !intransitive_triples.is_empty() {
            warn!(
                triples = intransitive_triples.len(),
                "Consensus order depends on sort stability"
            );
        }

        // 4. Assemble
        let result = analysis.result();
        let summary = result.summary();
        info!(
            universe_size = summary.universe_size,
            contradiction_pairs = summary.contradiction_pairs,
            group_count = summary.group_count,
            largest_group = summary.largest_group,
            "Aggregated rankings"
        );

        Ok(AggregateRankingsResult {
            result,
            summary,
            intransitive_triples,
        })
    }
}
