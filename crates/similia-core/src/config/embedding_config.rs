use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Embedding service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// HTTP endpoint of the external text→vector service.
    pub endpoint: String,
    /// Model identifier. Must match between build time and query time;
    /// checked against the persisted manifest.
    pub model: String,
    /// Expected embedding dimensionality.
    pub dimensions: usize,
    /// Request timeout in seconds. A timeout counts as a service failure.
    pub timeout_secs: u64,
    /// Maximum characters sent per embedding call; longer text is truncated.
    pub max_chars: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_EMBED_ENDPOINT.to_string(),
            model: defaults::DEFAULT_EMBED_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBED_DIMENSIONS,
            timeout_secs: constants::DEFAULT_EMBED_TIMEOUT_SECS,
            max_chars: constants::MAX_EMBED_CHARS,
        }
    }
}
