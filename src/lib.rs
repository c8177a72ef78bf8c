//! Ranking Consensus - Contradiction-core aggregation of two cluster rankings
//!
//! This crate combines two weak orders over the same alternatives into the pairs
//! they genuinely disagree on and a single consensus cluster ranking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
