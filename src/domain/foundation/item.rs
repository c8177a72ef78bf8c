//! Item value object - an alternative being ranked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An alternative that appears in a cluster ranking.
///
/// Items compare by value. An integer item and a text item are never equal,
/// even when the text spells the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Integer(i64),
    Text(String),
}

impl Item {
    /// Creates a text item.
    pub fn text(value: impl Into<String>) -> Self {
        Item::Text(value.into())
    }

    /// Returns the integer value, if this is an integer item.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Item::Integer(value) => Some(*value),
            Item::Text(_) => None,
        }
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Item::Integer(value)
    }
}

impl From<i32> for Item {
    fn from(value: i32) -> Self {
        Item::Integer(value as i64)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::Text(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::Text(value)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Integer(value) => write!(f, "{}", value),
            Item::Text(value) => write!(f, "{:?}", value),
        }
    }
}
