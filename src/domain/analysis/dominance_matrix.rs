//! Dominance Matrix - Weak "at least as well ranked as" relation for one ranking.

use std::fmt;

use crate::domain::foundation::{ConsensusError, RankingSide};
use crate::domain::ranking::{ItemUniverse, PositionIndex};

/// Square boolean matrix over the item universe.
///
/// `get(i, j)` is true iff item `i` sits at the same or a later position than
/// item `j`. Reflexive; not antisymmetric when the ranking has ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominanceMatrix {
    order: usize,
    cells: Vec<bool>,
}

impl DominanceMatrix {
    /// Builds the dominance relation of one ranking over the universe.
    ///
    /// # Errors
    /// `IncompleteRanking` if a universe item has no position in `index`.
    pub fn build(
        universe: &ItemUniverse,
        index: &PositionIndex,
        side: RankingSide,
    ) -> Result<Self, ConsensusError> {
        let positions = universe
            .items()
            .iter()
            .map(|item| {
                index
                    .position_of(item)
                    .ok_or_else(|| ConsensusError::incomplete_ranking(side, item))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_positions(&positions))
    }

    /// Builds the relation directly from per-id position indices.
    pub fn from_positions(positions: &[usize]) -> Self {
        let order = positions.len();
        let mut cells = Vec::with_capacity(order * order);
        for &pi in positions {
            for &pj in positions {
                cells.push(pi >= pj);
            }
        }
        Self { order, cells }
    }

    /// Returns the number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns `M[i][j]`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> bool {
        assert!(i < self.order && j < self.order, "index out of range");
        self.cells[i * self.order + j]
    }

    /// True iff this ranking places `i` strictly after `j`.
    pub fn strictly_above(&self, i: usize, j: usize) -> bool {
        self.get(i, j) && !self.get(j, i)
    }

    /// Element-wise conjunction of two matrices of the same order.
    pub fn and(&self, other: &DominanceMatrix) -> Result<DominanceMatrix, ConsensusError> {
        self.ensure_same_order(other)?;
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(&x, &y)| x && y)
            .collect();
        Ok(Self {
            order: self.order,
            cells,
        })
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> DominanceMatrix {
        let n = self.order;
        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cells.push(self.cells[j * n + i]);
            }
        }
        Self { order: n, cells }
    }

    pub(crate) fn ensure_same_order(&self, other: &DominanceMatrix) -> Result<(), ConsensusError> {
        if self.order != other.order {
            return Err(ConsensusError::DimensionMismatch {
                left: self.order,
                right: other.order,
            });
        }
        Ok(())
    }
}

/// Renders rows of `0`/`1` separated by spaces, one row per line.
impl fmt::Display for DominanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.order {
            let row: Vec<&str> = (0..self.order)
                .map(|j| if self.get(i, j) { "1" } else { "0" })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
