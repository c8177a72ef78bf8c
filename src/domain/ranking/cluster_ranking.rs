//! Cluster Ranking - A weak order over items with tied groups.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Item;

use super::PositionIndex;

/// One slot of a cluster ranking: a bare item or a tied group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    Single(Item),
    Tied(Vec<Item>),
}

impl Position {
    /// Creates a position holding one item.
    pub fn single(item: impl Into<Item>) -> Self {
        Position::Single(item.into())
    }

    /// Creates a position holding a tied group.
    pub fn tied<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Position::Tied(items.into_iter().map(Into::into).collect())
    }

    /// Returns the items held at this position, in written order.
    pub fn items(&self) -> &[Item] {
        match self {
            Position::Single(item) => std::slice::from_ref(item),
            Position::Tied(items) => items,
        }
    }
}

/// An ordered sequence of positions, leftmost (index 0) ranked lowest.
///
/// An item repeated across positions is not rejected; the position index keeps
/// its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterRanking {
    positions: Vec<Position>,
}

impl ClusterRanking {
    /// Creates a ranking from its positions.
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Creates a builder for constructing a ranking.
    pub fn builder() -> ClusterRankingBuilder {
        ClusterRankingBuilder::new()
    }

    /// Returns the positions, leftmost first.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the ranking has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over every item in appearance order, tied groups flattened.
    pub fn flattened(&self) -> impl Iterator<Item = &Item> + '_ {
        self.positions.iter().flat_map(|p| p.items().iter())
    }

    /// Builds the item → position index map for this ranking.
    pub fn position_index(&self) -> PositionIndex {
        PositionIndex::from_ranking(self)
    }
}

/// Builder for constructing ClusterRanking instances.
#[derive(Debug, Default)]
pub struct ClusterRankingBuilder {
    positions: Vec<Position>,
}

impl ClusterRankingBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bare item position.
    pub fn item(mut self, item: impl Into<Item>) -> Self {
        self.positions.push(Position::single(item));
        self
    }

    /// Appends a tied group position.
    pub fn tied<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        self.positions.push(Position::tied(items));
        self
    }

    /// Builds the ranking.
    pub fn build(self) -> ClusterRanking {
        ClusterRanking::new(self.positions)
    }
}
