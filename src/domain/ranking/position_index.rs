//! Position Index - Item to position lookup for one ranking.

use std::collections::HashMap;

use crate::domain::foundation::Item;

use super::ClusterRanking;

/// Maps each item of a ranking to the index of its containing position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    positions: HashMap<Item, usize>,
}

impl PositionIndex {
    /// Indexes a ranking. A repeated item keeps its last position.
    pub fn from_ranking(ranking: &ClusterRanking) -> Self {
        let mut positions = HashMap::new();
        for (idx, position) in ranking.positions().iter().enumerate() {
            for item in position.items() {
                positions.insert(item.clone(), idx);
            }
        }
        Self { positions }
    }

    /// Returns the position index of an item, if the ranking contains it.
    pub fn position_of(&self, item: &Item) -> Option<usize> {
        self.positions.get(item).copied()
    }

    /// Returns the number of distinct items indexed.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
