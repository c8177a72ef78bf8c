//! Consensus Aggregator - Runs the full contradiction-core pipeline.

use tracing::debug;

use crate::domain::foundation::{ConsensusError, RankingSide};
use crate::domain::ranking::{ClusterRanking, ItemUniverse};

use super::{
    ClusterOrderer, ConsensusClusterer, ConsensusGroup, ConsensusResult, ContradictionCore,
    ContradictionDetector, DominanceMatrix, IntransitiveTriple,
};

/// Every intermediate structure of one aggregation.
#[derive(Debug, Clone)]
pub struct ConsensusAnalysis {
    pub universe: ItemUniverse,
    pub matrix_a: DominanceMatrix,
    pub matrix_b: DominanceMatrix,
    pub core: ContradictionCore,
    /// Groups in final consensus order, lowest ranked first.
    pub groups: Vec<ConsensusGroup>,
}

impl ConsensusAnalysis {
    /// Builds the published result.
    pub fn result(&self) -> ConsensusResult {
        ConsensusResult::assemble(&self.universe, &self.core, &self.groups)
    }

    /// Audits the group comparator for cycles.
    pub fn intransitive_triples(&self) -> Vec<IntransitiveTriple> {
        ClusterOrderer::find_intransitive_triples(&self.groups, &self.matrix_a, &self.matrix_b)
    }
}

/// Aggregates two cluster rankings into a contradiction core and consensus.
pub struct ConsensusAggregator;

impl ConsensusAggregator {
    /// Runs every stage and keeps the intermediates.
    ///
    /// # Errors
    /// `IncompleteRanking` if an item of either ranking is missing from the other.
    pub fn analyze(
        a: &ClusterRanking,
        b: &ClusterRanking,
    ) -> Result<ConsensusAnalysis, ConsensusError> {
        let universe = ItemUniverse::from_rankings(a, b);

        let matrix_a = DominanceMatrix::build(&universe, &a.position_index(), RankingSide::A)?;
        let matrix_b = DominanceMatrix::build(&universe, &b.position_index(), RankingSide::B)?;
        debug!(universe_size = universe.len(), "Built dominance matrices");

        let core = ContradictionDetector::detect(&matrix_a, &matrix_b)?;
        let groups = ConsensusClusterer::cluster(universe.len(), &core);
        debug!(
            contradiction_pairs = core.len(),
            group_count = groups.len(),
            "Merged contradicting items"
        );

        let groups = ClusterOrderer::order(groups, &matrix_a, &matrix_b);

        Ok(ConsensusAnalysis {
            universe,
            matrix_a,
            matrix_b,
            core,
            groups,
        })
    }

    /// Aggregates two rankings into the published result.
    pub fn aggregate(
        a: &ClusterRanking,
        b: &ClusterRanking,
    ) -> Result<ConsensusResult, ConsensusError> {
        Ok(Self::analyze(a, b)?.result())
    }
}
