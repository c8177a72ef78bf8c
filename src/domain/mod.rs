//! Domain layer containing the aggregation logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (items, ranking sides, errors)
//! - `ranking` - Cluster rankings, position indices, and the item universe
//! - `analysis` - Pure domain services for contradiction-core aggregation

pub mod analysis;
pub mod foundation;
pub mod ranking;
