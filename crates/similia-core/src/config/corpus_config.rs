use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Candidate corpus files in preference order; the first one that exists
    /// is loaded. Mirrors the full-corpus-then-master fallback of the
    /// source data layout.
    pub paths: Vec<PathBuf>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            paths: defaults::DEFAULT_CORPUS_PATHS
                .iter()
                .map(PathBuf::from)
                .collect(),
        }
    }
}
