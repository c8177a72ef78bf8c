//! Contradiction Detector - Pairs on which two rankings have no joint order.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ConsensusError;

use super::DominanceMatrix;

/// Ordered pairs of dense ids `(i, j)`, `i != j`, that neither ranking pair
/// jointly orders in either direction.
///
/// Symmetric by construction: `(i, j)` is present iff `(j, i)` is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContradictionCore {
    pairs: Vec<(usize, usize)>,
}

impl ContradictionCore {
    /// Returns the pairs in row-major order.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Returns the number of ordered pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the rankings never contradict each other.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns true if `(i, j)` is a contradiction.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.pairs.contains(&(i, j))
    }
}

/// Finds the contradiction core of two dominance relations.
pub struct ContradictionDetector;

impl ContradictionDetector {
    /// Detects every ordered pair without directional consensus.
    ///
    /// # Algorithm
    /// - `fwd = A ∧ B` (both say i ≥ j)
    /// - `bwd = Aᵀ ∧ Bᵀ` (both say j ≥ i)
    /// - `(i, j)` contradicts iff `!fwd[i][j] && !bwd[i][j]`
    ///
    /// A pair tied in one ranking and strictly ordered in the other is not a
    /// contradiction: one direction is still jointly supported.
    ///
    /// # Errors
    /// `DimensionMismatch` if the matrices differ in order.
    pub fn detect(
        a: &DominanceMatrix,
        b: &DominanceMatrix,
    ) -> Result<ContradictionCore, ConsensusError> {
        let agree_fwd = a.and(b)?;
        let agree_bwd = a.transpose().and(&b.transpose())?;

        let n = a.order();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                if !agree_fwd.get(i, j) && !agree_bwd.get(i, j) {
                    pairs.push((i, j));
                }
            }
        }

        Ok(ContradictionCore { pairs })
    }

    /// The contradiction predicate for a single pair.
    pub fn contradicts(a: &DominanceMatrix, b: &DominanceMatrix, i: usize, j: usize) -> bool {
        let agree_fwd = a.get(i, j) && b.get(i, j);
        let agree_bwd = a.get(j, i) && b.get(j, i);
        i != j && !agree_fwd && !agree_bwd
    }
}
