use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Persisted artifact location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Directory holding the embedding matrix, manifest, and id map.
    /// Builds write a complete replacement set; build-then-swap, never
    /// build-while-serving.
    pub artifacts_dir: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from(defaults::DEFAULT_ARTIFACTS_DIR),
        }
    }
}
