use serde::{Deserialize, Serialize};

use crate::constants;

/// Retrieval and ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Hard cap on the candidate list returned per query. The presentation
    /// layer may truncate further for display.
    pub max_candidates: usize,
    /// How many positions semantic search requests from the index.
    pub semantic_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_candidates: constants::DEFAULT_MAX_CANDIDATES,
            semantic_top_k: constants::DEFAULT_SEMANTIC_TOP_K,
        }
    }
}
