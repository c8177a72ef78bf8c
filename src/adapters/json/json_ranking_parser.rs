//! JSON ranking parser adapter.
//!
//! Reads rankings written as JSON arrays, e.g. `[1, [2, 3], 4]`, where a nested
//! array is a tied group.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;

use crate::domain::foundation::{ConsensusError, Item, RankingSide};
use crate::domain::ranking::{ClusterRanking, Position};
use crate::ports::RankingParser;

/// Matches a separator dangling before a closing `]` or `}`.
static TRAILING_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([\]}])").expect("trailing separator pattern is valid"));

/// JSON implementation of RankingParser.
#[derive(Debug, Clone)]
pub struct JsonRankingParser {
    tolerate_trailing_separators: bool,
}

impl Default for JsonRankingParser {
    fn default() -> Self {
        Self::lenient()
    }
}

impl JsonRankingParser {
    /// Creates a parser that drops trailing separators before parsing.
    pub fn lenient() -> Self {
        Self {
            tolerate_trailing_separators: true,
        }
    }

    /// Creates a parser that accepts only well-formed JSON.
    pub fn strict() -> Self {
        Self {
            tolerate_trailing_separators: false,
        }
    }

    /// Creates a parser with explicit leniency.
    pub fn new(tolerate_trailing_separators: bool) -> Self {
        Self {
            tolerate_trailing_separators,
        }
    }

    fn clean<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.tolerate_trailing_separators {
            TRAILING_SEPARATOR.replace_all(text, "$1")
        } else {
            Cow::Borrowed(text)
        }
    }

    fn position_from_value(value: Value, side: RankingSide) -> Result<Position, ConsensusError> {
        match value {
            Value::Array(members) => members
                .into_iter()
                .map(|member| match member {
                    Value::Array(_) => Err(ConsensusError::unsupported_item(
                        side,
                        format!("nested group {} inside a tied group", member),
                    )),
                    scalar => Self::item_from_value(scalar, side),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Position::Tied),
            scalar => Self::item_from_value(scalar, side).map(Position::Single),
        }
    }

    fn item_from_value(value: Value, side: RankingSide) -> Result<Item, ConsensusError> {
        match value {
            Value::Number(ref number) => number
                .as_i64()
                .map(Item::Integer)
                .ok_or_else(|| ConsensusError::unsupported_item(side, value.to_string())),
            Value::String(text) => Ok(Item::Text(text)),
            other => Err(ConsensusError::unsupported_item(side, other.to_string())),
        }
    }
}

impl RankingParser for JsonRankingParser {
    fn parse(&self, text: &str, side: RankingSide) -> Result<ClusterRanking, ConsensusError> {
        let cleaned = self.clean(text);
        let value: Value = serde_json::from_str(&cleaned)
            .map_err(|e| ConsensusError::parse(side, e.to_string()))?;

        let Value::Array(slots) = value else {
            return Err(ConsensusError::parse(
                side,
                "expected a JSON array of positions",
            ));
        };

        let positions = slots
            .into_iter()
            .map(|slot| Self::position_from_value(slot, side))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClusterRanking::new(positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn parse(text: &str) -> Result<ClusterRanking, ConsensusError> {
        JsonRankingParser::lenient().parse(text, RankingSide::A)
    }

    #[test]
    fn parses_items_and_tied_groups() {
        let ranking = parse("[1, [2, 3], 4]").unwrap();
        assert_eq!(
            ranking,
            ClusterRanking::builder().item(1).tied([2, 3]).item(4).build()
        );
    }

    #[test]
    fn parses_text_items() {
        let ranking = parse(r#"["alpha", ["beta", "gamma"]]"#).unwrap();
        assert_eq!(
            ranking,
            ClusterRanking::builder().item("alpha").tied(["beta", "gamma"]).build()
        );
    }

    #[test]
    fn lenient_parser_drops_trailing_separators() {
        let ranking = parse("[1,[2,3,],4,\n]").unwrap();
        assert_eq!(
            ranking,
            ClusterRanking::builder().item(1).tied([2, 3]).item(4).build()
        );
    }

    #[test]
    fn strict_parser_rejects_trailing_separators() {
        let err = JsonRankingParser::strict()
            .parse("[1,[2,3,],4]", RankingSide::B)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParseFailed);
        assert!(matches!(err, ConsensusError::Parse { side: RankingSide::B, .. }));
    }

    #[test]
    fn malformed_text_is_parse_error() {
        assert_eq!(parse("[1, 2").unwrap_err().code(), ErrorCode::ParseFailed);
        assert_eq!(parse("").unwrap_err().code(), ErrorCode::ParseFailed);
    }

    #[test]
    fn top_level_must_be_array() {
        let err = parse(r#"{"a": 1,}"#).unwrap_err();
        assert_eq!(
            err,
            ConsensusError::parse(RankingSide::A, "expected a JSON array of positions")
        );
    }

    #[test]
    fn floats_and_booleans_are_not_items() {
        assert_eq!(parse("[1.5]").unwrap_err().code(), ErrorCode::UnsupportedItem);
        assert_eq!(parse("[true]").unwrap_err().code(), ErrorCode::UnsupportedItem);
        assert_eq!(parse("[[null]]").unwrap_err().code(), ErrorCode::UnsupportedItem);
    }

    #[test]
    fn nested_groups_are_rejected() {
        let err = parse("[1, [2, [3]]]").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedItem);
    }

    #[test]
    fn empty_ranking_and_empty_group_parse() {
        assert!(parse("[]").unwrap().is_empty());
        assert_eq!(parse("[[], 1]").unwrap().len(), 2);
    }
}
