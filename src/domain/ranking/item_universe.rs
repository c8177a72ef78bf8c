//! Item Universe - Canonical item order shared by both rankings.

use std::collections::HashMap;

use crate::domain::foundation::Item;

use super::ClusterRanking;

/// Distinct items of both rankings in first-appearance order.
///
/// Each item's appearance index doubles as its dense id: it is the row and
/// column of every dominance matrix and the final tie-break key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUniverse {
    items: Vec<Item>,
    ids: HashMap<Item, usize>,
}

impl ItemUniverse {
    /// Collects ranking A's flattened items, then B's, dropping repeats.
    pub fn from_rankings(a: &ClusterRanking, b: &ClusterRanking) -> Self {
        let mut universe = Self::default();
        for item in a.flattened().chain(b.flattened()) {
            universe.push(item);
        }
        universe
    }

    fn push(&mut self, item: &Item) {
        if self.ids.contains_key(item) {
            return;
        }
        self.ids.insert(item.clone(), self.items.len());
        self.items.push(item.clone());
    }

    /// Returns the number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if neither ranking has any item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in appearance order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item with the given id.
    ///
    /// # Panics
    /// Panics if `id >= len()`.
    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    /// Returns the dense id (appearance index) of an item.
    pub fn id_of(&self, item: &Item) -> Option<usize> {
        self.ids.get(item).copied()
    }
}
