//! Consensus Clusterer - Merges contradicting items into indifference groups.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ContradictionCore;

/// Items merged because chained contradictions connect them.
///
/// Members are dense ids in ascending appearance order, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusGroup {
    members: Vec<usize>,
}

impl ConsensusGroup {
    /// Creates a group from member ids, sorting them by appearance.
    ///
    /// # Panics
    /// Panics if `members` is empty.
    pub fn new(mut members: Vec<usize>) -> Self {
        assert!(!members.is_empty(), "consensus group cannot be empty");
        members.sort_unstable();
        Self { members }
    }

    /// Returns member ids in appearance order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// The member compared on behalf of the group: its lowest id.
    pub fn representative(&self) -> usize {
        self.members[0]
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; groups hold at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if this group holds a single item.
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// Arena union-find over dense ids, with path halving and union by size.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Returns the root of `x`'s set, compressing the path on the way.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets of `a` and `b`. Returns false if already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }

    /// Returns true if `a` and `b` share a set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Partitions the universe into consensus groups.
pub struct ConsensusClusterer;

impl ConsensusClusterer {
    /// Unions the endpoints of every contradiction edge over `n` items.
    ///
    /// Groups come back ordered by representative, members by appearance.
    ///
    /// # Edge Cases
    /// - `n == 0`: Returns empty Vec
    /// - No contradictions: Every item is its own group
    pub fn cluster(n: usize, core: &ContradictionCore) -> Vec<ConsensusGroup> {
        if n == 0 {
            return Vec::new();
        }

        let mut sets = DisjointSets::new(n);
        for &(i, j) in core.pairs() {
            sets.union(i, j);
        }

        // Ids are visited ascending, so the first member seen fixes group order.
        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut members: Vec<Vec<usize>> = Vec::new();
        for id in 0..n {
            let root = sets.find(id);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                members.push(Vec::new());
                members.len() - 1
            });
            members[slot].push(id);
        }

        members.into_iter().map(ConsensusGroup::new).collect()
    }
}
