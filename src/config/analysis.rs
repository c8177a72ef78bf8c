//! Aggregation analysis configuration

use serde::Deserialize;

/// Options for the aggregation pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Audit the group comparator for cycles after ordering
    #[serde(default = "default_audit_transitivity")]
    pub audit_transitivity: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            audit_transitivity: default_audit_transitivity(),
        }
    }
}

fn default_audit_transitivity() -> bool {
    true
}
