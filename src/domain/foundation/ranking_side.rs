//! Which of the two input rankings a value belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the two rankings being aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingSide {
    A,
    B,
}

impl RankingSide {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RankingSide::A => "A",
            RankingSide::B => "B",
        }
    }
}

impl fmt::Display for RankingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
