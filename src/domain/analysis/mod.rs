//! Analysis Module - Pure domain services for ranking aggregation.
//!
//! # Components
//!
//! - `DominanceMatrix` - Weak dominance relation of one ranking
//! - `ContradictionDetector` - Pairs with no joint order in either direction
//! - `ConsensusClusterer` - Union-find merge of contradicting items
//! - `ClusterOrderer` - Pairwise voting order over merged groups
//! - `ConsensusResult` - Published contradiction pairs and consensus ranking
//! - `ConsensusAggregator` - The full pipeline
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Items are mapped to
//! dense ids once by the `ItemUniverse`; every stage after that works on
//! integer indices.

mod cluster_orderer;
mod consensus_aggregator;
mod consensus_clusterer;
mod consensus_result;
mod contradiction_detector;
mod dominance_matrix;

pub use cluster_orderer::{ClusterOrderer, IntransitiveTriple};
pub use consensus_aggregator::{ConsensusAggregator, ConsensusAnalysis};
pub use consensus_clusterer::{ConsensusClusterer, ConsensusGroup, DisjointSets};
pub use consensus_result::{ConsensusResult, ConsensusSummary, ContradictionPair, RankingEntry};
pub use contradiction_detector::{ContradictionCore, ContradictionDetector};
pub use dominance_matrix::DominanceMatrix;
