//! Consensus Result - Published contradiction core and consensus ranking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Item;
use crate::domain::ranking::ItemUniverse;

use super::{ConsensusGroup, ContradictionCore};

/// A contradicting ordered pair, serialized as `[item_i, item_j]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContradictionPair(pub Item, pub Item);

/// One slot of the consensus ranking: a bare item or a merged group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankingEntry {
    Single(Item),
    Group(Vec<Item>),
}

/// The published aggregation result.
///
/// Field names are part of the output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// Every contradicting ordered pair, both directions, row-major.
    pub variant1: Vec<ContradictionPair>,
    /// Consensus cluster ranking, lowest ranked first.
    pub variant2: Vec<RankingEntry>,
}

/// Counts describing a consensus result, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusSummary {
    pub universe_size: usize,
    pub contradiction_pairs: usize,
    pub group_count: usize,
    pub largest_group: usize,
}

impl ConsensusResult {
    /// Packages the core and the ordered groups, mapping ids back to items.
    pub fn assemble(
        universe: &ItemUniverse,
        core: &ContradictionCore,
        ordered_groups: &[ConsensusGroup],
    ) -> Self {
        let variant1 = core
            .pairs()
            .iter()
            .map(|&(i, j)| ContradictionPair(universe.item(i).clone(), universe.item(j).clone()))
            .collect();

        let variant2 = ordered_groups
            .iter()
            .map(|group| {
                if group.is_singleton() {
                    RankingEntry::Single(universe.item(group.representative()).clone())
                } else {
                    RankingEntry::Group(
                        group
                            .members()
                            .iter()
                            .map(|&id| universe.item(id).clone())
                            .collect(),
                    )
                }
            })
            .collect();

        Self { variant1, variant2 }
    }

    /// Summarizes the result.
    pub fn summary(&self) -> ConsensusSummary {
        let sizes = self.variant2.iter().map(|entry| match entry {
            RankingEntry::Single(_) => 1,
            RankingEntry::Group(items) => items.len(),
        });

        ConsensusSummary {
            universe_size: sizes.clone().sum(),
            contradiction_pairs: self.variant1.len(),
            group_count: self.variant2.len(),
            largest_group: sizes.max().unwrap_or(0),
        }
    }

    /// Serializes the result as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
