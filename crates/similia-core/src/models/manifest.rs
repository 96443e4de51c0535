use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Build-time metadata persisted beside the embedding matrix and id map.
///
/// Lets a serving process detect a model, dimension, or corpus mismatch
/// instead of silently producing meaningless scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexManifest {
    /// Identifier of the embedding model used at build time.
    pub model: String,
    /// Embedding dimensionality at build time.
    pub dimensions: usize,
    /// Number of rows in the matrix (== corpus size at build time).
    pub rows: usize,
    /// Blake3 fingerprint of the corpus the matrix was built from.
    pub corpus_fingerprint: String,
    pub built_at: DateTime<Utc>,
}
