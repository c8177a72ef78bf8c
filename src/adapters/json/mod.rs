//! JSON Adapters - Ranking text parsing.

mod json_ranking_parser;

pub use json_ranking_parser::JsonRankingParser;
