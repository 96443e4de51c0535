//! Configuration structs. Every field has a serde default so a partial or
//! absent config file yields a fully working configuration.

mod corpus_config;
mod defaults;
mod embedding_config;
mod index_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, SimiliaResult};

pub use corpus_config::CorpusConfig;
pub use embedding_config::EmbeddingConfig;
pub use index_config::IndexConfig;
pub use retrieval_config::RetrievalConfig;

/// Top-level configuration for the similia engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimiliaConfig {
    pub corpus: CorpusConfig,
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
    pub retrieval: RetrievalConfig,
}

impl SimiliaConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> SimiliaResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }
}
