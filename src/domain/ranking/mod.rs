//! Ranking Module - Cluster rankings and their normalized views.
//!
//! - `ClusterRanking` - Ordered positions, each a bare item or a tied group
//! - `PositionIndex` - Item → position lookup for one ranking
//! - `ItemUniverse` - Canonical appearance order across both rankings

mod cluster_ranking;
mod item_universe;
mod position_index;

pub use cluster_ranking::{ClusterRanking, ClusterRankingBuilder, Position};
pub use item_universe::ItemUniverse;
pub use position_index::PositionIndex;
