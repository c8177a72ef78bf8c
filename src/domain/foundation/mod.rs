//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary of
//! ranking aggregation.

mod errors;
mod item;
mod ranking_side;

pub use errors::{ConsensusError, ErrorCode};
pub use item::Item;
pub use ranking_side::RankingSide;
