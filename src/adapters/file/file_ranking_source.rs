//! Filesystem ranking source adapter.

use std::fs;
use std::path::PathBuf;

use crate::domain::foundation::ConsensusError;
use crate::ports::RankingSource;

/// Reads ranking text from files, resolving relative paths against `base_dir`.
#[derive(Debug, Clone, Default)]
pub struct FileRankingSource {
    base_dir: Option<PathBuf>,
}

impl FileRankingSource {
    /// Creates a source that resolves paths against the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source rooted at `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(location),
            None => PathBuf::from(location),
        }
    }
}

impl RankingSource for FileRankingSource {
    fn read(&self, location: &str) -> Result<String, ConsensusError> {
        let path = self.resolve(location);
        tracing::debug!(path = %path.display(), "Reading ranking file");
        fs::read_to_string(&path).map_err(|e| ConsensusError::source_unavailable(location, e.to_string()))
    }
}
