//! Cluster Orderer - Totally orders consensus groups by pairwise voting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{ConsensusGroup, DominanceMatrix};

/// Three groups the comparator does not order transitively.
///
/// Fields are representative ids: `first` sorts after `second`, `second`
/// sorts after `third`, yet `first` does not sort after `third`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntransitiveTriple {
    pub first: usize,
    pub second: usize,
    pub third: usize,
}

/// Orders consensus groups from lowest to highest ranked.
pub struct ClusterOrderer;

impl ClusterOrderer {
    /// Pairwise vote between items `i` and `j`.
    ///
    /// Each ranking contributes -1 when it puts `i` strictly before `j`,
    /// +1 when strictly after, and nothing when it ties them.
    pub fn score(i: usize, j: usize, a: &DominanceMatrix, b: &DominanceMatrix) -> i32 {
        [a, b]
            .iter()
            .map(|m| {
                if m.strictly_above(j, i) {
                    -1
                } else if m.strictly_above(i, j) {
                    1
                } else {
                    0
                }
            })
            .sum()
    }

    /// Compares two groups through their representatives.
    ///
    /// Negative score puts `g1` first, positive puts it after, and a zero score
    /// falls back to ascending appearance index.
    pub fn compare(
        g1: &ConsensusGroup,
        g2: &ConsensusGroup,
        a: &DominanceMatrix,
        b: &DominanceMatrix,
    ) -> Ordering {
        let (i, j) = (g1.representative(), g2.representative());
        match Self::score(i, j, a, b).cmp(&0) {
            Ordering::Equal => i.cmp(&j),
            decided => decided,
        }
    }

    /// Stable-sorts groups with [`ClusterOrderer::compare`].
    pub fn order(
        mut groups: Vec<ConsensusGroup>,
        a: &DominanceMatrix,
        b: &DominanceMatrix,
    ) -> Vec<ConsensusGroup> {
        groups.sort_by(|g1, g2| Self::compare(g1, g2, a, b));
        groups
    }

    /// Searches all ordered triples of groups for a comparator cycle.
    ///
    /// Groups produced by [`super::ConsensusClusterer`] never yield one: any two
    /// of them are jointly ordered by both rankings, which makes the score a
    /// Pareto comparison. Cycles appear only when contradicting items are kept
    /// in separate groups.
    ///
    /// # Edge Cases
    /// - Fewer than 3 groups: Returns empty Vec
    pub fn find_intransitive_triples(
        groups: &[ConsensusGroup],
        a: &DominanceMatrix,
        b: &DominanceMatrix,
    ) -> Vec<IntransitiveTriple> {
        let mut found = Vec::new();

        if groups.len() < 3 {
            return found;
        }

        let after = |x: &ConsensusGroup, y: &ConsensusGroup| {
            Self::compare(x, y, a, b) == Ordering::Greater
        };

        for (fi, first) in groups.iter().enumerate() {
            for (si, second) in groups.iter().enumerate() {
                if si == fi || !after(first, second) {
                    continue;
                }
                for (ti, third) in groups.iter().enumerate() {
                    if ti == fi || ti == si {
                        continue;
                    }
                    if after(second, third) && !after(first, third) {
                        found.push(IntransitiveTriple {
                            first: first.representative(),
                            second: second.representative(),
                            third: third.representative(),
                        });
                    }
                }
            }
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn singletons(n: usize) -> Vec<ConsensusGroup> {
        (0..n).map(|id| ConsensusGroup::new(vec![id])).collect()
    }

    fn reps(groups: &[ConsensusGroup]) -> Vec<usize> {
        groups.iter().map(ConsensusGroup::representative).collect()
    }

    #[test]
    fn score_counts_strict_votes() {
        let a = DominanceMatrix::from_positions(&[0, 1]);
        let b = DominanceMatrix::from_positions(&[0, 1]);
        assert_eq!(ClusterOrderer::score(0, 1, &a, &b), -2);
        assert_eq!(ClusterOrderer::score(1, 0, &a, &b), 2);
    }

    #[test]
    fn tie_contributes_nothing() {
        let a = DominanceMatrix::from_positions(&[0, 0]);
        let b = DominanceMatrix::from_positions(&[1, 0]);
        assert_eq!(ClusterOrderer::score(0, 1, &a, &b), 1);
        assert_eq!(ClusterOrderer::score(1, 0, &a, &b), -1);
    }

    #[test]
    fn opposing_votes_cancel() {
        let a = DominanceMatrix::from_positions(&[0, 1]);
        let b = DominanceMatrix::from_positions(&[1, 0]);
        assert_eq!(ClusterOrderer::score(0, 1, &a, &b), 0);
    }

    #[test]
    fn orders_by_agreed_preference() {
        // Appearance order 0,1,2 but both rankings place 2 lowest.
        let a = DominanceMatrix::from_positions(&[1, 2, 0]);
        let b = DominanceMatrix::from_positions(&[1, 1, 0]);
        let ordered = ClusterOrderer::order(singletons(3), &a, &b);
        assert_eq!(reps(&ordered), vec![2, 0, 1]);
    }

    #[test]
    fn zero_score_falls_back_to_appearance() {
        let a = DominanceMatrix::from_positions(&[0, 0, 0]);
        let b = DominanceMatrix::from_positions(&[0, 0, 0]);
        let mut groups = singletons(3);
        groups.reverse();
        let ordered = ClusterOrderer::order(groups, &a, &b);
        assert_eq!(reps(&ordered), vec![0, 1, 2]);
    }

    #[test]
    fn compare_uses_representatives() {
        let a = DominanceMatrix::from_positions(&[2, 2, 0]);
        let b = DominanceMatrix::from_positions(&[2, 2, 0]);
        let merged = ConsensusGroup::new(vec![0, 1]);
        let low = ConsensusGroup::new(vec![2]);
        assert_eq!(ClusterOrderer::compare(&merged, &low, &a, &b), Ordering::Greater);
        assert_eq!(ClusterOrderer::compare(&low, &merged, &a, &b), Ordering::Less);
    }

    #[test]
    fn consistent_rankings_have_no_intransitive_triples() {
        let a = DominanceMatrix::from_positions(&[0, 1, 2, 3]);
        let b = DominanceMatrix::from_positions(&[0, 2, 2, 3]);
        let triples = ClusterOrderer::find_intransitive_triples(&singletons(4), &a, &b);
        assert!(triples.is_empty());
    }

    #[test]
    fn detects_cycle_among_unmerged_groups() {
        // 0/1 and 1/2 contradict and fall back to appearance order, while both
        // rankings put 2 below 0. Kept as singletons, they form a cycle.
        let a = DominanceMatrix::from_positions(&[1, 2, 0]);
        let b = DominanceMatrix::from_positions(&[2, 0, 1]);
        let triples = ClusterOrderer::find_intransitive_triples(&singletons(3), &a, &b);
        assert!(triples.contains(&IntransitiveTriple {
            first: 2,
            second: 1,
            third: 0,
        }));
    }

    #[test]
    fn fewer_than_three_groups_skip_audit() {
        let a = DominanceMatrix::from_positions(&[0, 1]);
        assert!(ClusterOrderer::find_intransitive_triples(&singletons(2), &a, &a).is_empty());
    }
}
