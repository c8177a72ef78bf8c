//! Input parsing configuration

use serde::Deserialize;

/// Ranking text parsing options
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    /// Drop a separator dangling right before `]` or `}`
    #[serde(default = "default_tolerate_trailing_separators")]
    pub tolerate_trailing_separators: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            tolerate_trailing_separators: default_tolerate_trailing_separators(),
        }
    }
}

fn default_tolerate_trailing_separators() -> bool {
    true
}
