//! Integration tests for ranking aggregation through the application layer.
//!
//! Rankings go in as text and come out as the published JSON document, so these
//! tests cover parser, pipeline, and serialization together.

use serde_json::{json, Value};
use std::fs;
use std::sync::Arc;

use ranking_consensus::adapters::{FileRankingSource, JsonRankingParser};
use ranking_consensus::application::{
    AggregateRankingFilesCommand, AggregateRankingFilesHandler, AggregateRankingsCommand,
    AggregateRankingsHandler, AggregateRankingsOptions,
};
use ranking_consensus::domain::foundation::{ConsensusError, ErrorCode, Item, RankingSide};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn handler() -> AggregateRankingsHandler {
    AggregateRankingsHandler::new(
        Arc::new(JsonRankingParser::lenient()),
        AggregateRankingsOptions::default(),
    )
}

fn aggregate(a: &str, b: &str) -> Result<Value, ConsensusError> {
    let result = handler().handle(AggregateRankingsCommand {
        ranking_a: a.to_string(),
        ranking_b: b.to_string(),
    })?;
    Ok(serde_json::from_str(&result.to_json().unwrap()).unwrap())
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn identical_rankings_have_no_contradictions() {
    assert_eq!(
        aggregate("[1,2,3]", "[1,2,3]").unwrap(),
        json!({"variant1": [], "variant2": [1, 2, 3]})
    );
}

#[test]
fn swapped_pair_becomes_one_group() {
    assert_eq!(
        aggregate("[1,2]", "[2,1]").unwrap(),
        json!({"variant1": [[1, 2], [2, 1]], "variant2": [[1, 2]]})
    );
}

#[test]
fn single_item_is_a_bare_entry() {
    assert_eq!(
        aggregate(r#"["x"]"#, r#"["x"]"#).unwrap(),
        json!({"variant1": [], "variant2": ["x"]})
    );
}

#[test]
fn full_reversal_merges_everything() {
    let result = aggregate("[1,2,3,4,5]", "[5,4,3,2,1]").unwrap();
    assert_eq!(result["variant1"].as_array().unwrap().len(), 20);
    assert_eq!(result["variant2"], json!([[1, 2, 3, 4, 5]]));
}

#[test]
fn tie_resolved_by_other_ranking() {
    // A ties all three; B orders them. No pair contradicts.
    assert_eq!(
        aggregate("[[1,2,3]]", "[3,2,1]").unwrap(),
        json!({"variant1": [], "variant2": [3, 2, 1]})
    );
}

#[test]
fn group_moves_past_single_item() {
    assert_eq!(
        aggregate("[1,[2,3],4]", "[1,4,[2,3]]").unwrap(),
        json!({
            "variant1": [[2, 4], [3, 4], [4, 2], [4, 3]],
            "variant2": [1, [2, 3, 4]]
        })
    );
}

#[test]
fn ten_alternatives_with_clusters() {
    assert_eq!(
        aggregate("[1,[2,3],4,[5,6,7],8,9,10]", "[[1,2],4,3,[5,6],7,8,9,10]").unwrap(),
        json!({
            "variant1": [[3, 4], [4, 3]],
            "variant2": [1, 2, [3, 4], 5, 6, 7, 8, 9, 10]
        })
    );
}

#[test]
fn trailing_separators_are_forgiven() {
    assert_eq!(
        aggregate("[1,[2,3,],4,]", "[4,3,2,1,]").unwrap(),
        aggregate("[1,[2,3],4]", "[4,3,2,1]").unwrap()
    );
}

#[test]
fn text_items_keep_their_type() {
    assert_eq!(
        aggregate(r#"["a",["b","c"],"d"]"#, r#"["d",["a","b"],"c"]"#).unwrap(),
        json!({
            "variant1": [["a", "d"], ["b", "d"], ["c", "d"], ["d", "a"], ["d", "b"], ["d", "c"]],
            "variant2": [["a", "b", "c", "d"]]
        })
    );
}

#[test]
fn identical_input_gives_identical_bytes() {
    let run = || {
        handler()
            .handle(AggregateRankingsCommand {
                ranking_a: "[3,[1,\"x\"],2,[4,5]]".to_string(),
                ranking_b: "[[3,1],5,\"x\",[2,4]]".to_string(),
            })
            .unwrap()
            .to_json()
            .unwrap()
    };
    assert_eq!(run(), run());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unparseable_ranking_fails_fast() {
    let err = aggregate("[1,2", "[1,2]").unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParseFailed);
}

#[test]
fn item_missing_from_a_ranking_is_incomplete() {
    let err = aggregate("[1,2,3]", "[1,2]").unwrap_err();
    assert_eq!(
        err,
        ConsensusError::incomplete_ranking(RankingSide::B, Item::from(3))
    );
}

#[test]
fn integer_and_text_labels_are_distinct_items() {
    let err = aggregate(r#"[1]"#, r#"["1"]"#).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IncompleteRanking);
}

// =============================================================================
// File-based aggregation
// =============================================================================

#[test]
fn aggregates_rankings_from_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("expert_a.json"), "[1,2]\n").unwrap();
    fs::write(dir.path().join("expert_b.json"), "[2,1]\n").unwrap();

    let handler = AggregateRankingFilesHandler::new(
        Arc::new(FileRankingSource::with_base_dir(dir.path())),
        handler(),
    );
    let result = handler
        .handle(AggregateRankingFilesCommand {
            location_a: "expert_a.json".to_string(),
            location_b: "expert_b.json".to_string(),
        })
        .unwrap();

    assert_eq!(
        result.to_json().unwrap(),
        r#"{"variant1":[[1,2],[2,1]],"variant2":[[1,2]]}"#
    );
}

#[test]
fn missing_file_reports_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let handler = AggregateRankingFilesHandler::new(
        Arc::new(FileRankingSource::with_base_dir(dir.path())),
        handler(),
    );
    let err = handler
        .handle(AggregateRankingFilesCommand {
            location_a: "nope.json".to_string(),
            location_b: "nope.json".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::SourceUnavailable);
}
