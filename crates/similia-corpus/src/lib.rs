//! # similia-corpus
//!
//! Loads the ordered, immutable remedy collection from a static JSON file.
//! Load order is the sole identity key used for index alignment, so it must
//! be stable across processes reading the same file.

use std::path::Path;

use tracing::{info, warn};

use similia_core::errors::{CorpusError, SimiliaResult};
use similia_core::Remedy;

/// The loaded corpus: an ordered, read-only sequence of remedies.
///
/// Safe to share behind an `Arc` across concurrent callers; nothing mutates
/// it after load.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    remedies: Vec<Remedy>,
}

impl Corpus {
    /// Load the corpus from a JSON file.
    ///
    /// A missing or top-level-unparsable file is `CorpusError::Unavailable`.
    /// Individual records that fail to deserialize are salvaged: their
    /// string fields are kept where readable and everything else defaults
    /// to empty, so one bad record never sinks the load.
    pub fn load(path: &Path) -> SimiliaResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CorpusError::Unavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let records: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| CorpusError::Unavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut remedies = Vec::with_capacity(records.len());
        for (position, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Remedy>(record.clone()) {
                Ok(remedy) => remedies.push(remedy),
                Err(e) => {
                    warn!(position, error = %e, "malformed corpus record, salvaging");
                    remedies.push(salvage_record(&record));
                }
            }
        }

        info!(
            path = %path.display(),
            remedies = remedies.len(),
            "corpus loaded"
        );

        Ok(Self { remedies })
    }

    /// Load the first existing file from a preference-ordered path list.
    pub fn load_first(paths: &[impl AsRef<Path>]) -> SimiliaResult<Self> {
        for path in paths {
            if path.as_ref().exists() {
                return Self::load(path.as_ref());
            }
        }
        Err(CorpusError::Unavailable {
            path: paths
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            reason: "no corpus file found".to_string(),
        }
        .into())
    }

    /// Construct directly from remedies, for tests and programmatic corpora.
    pub fn from_remedies(remedies: Vec<Remedy>) -> Self {
        Self { remedies }
    }

    pub fn len(&self) -> usize {
        self.remedies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remedies.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Remedy> {
        self.remedies.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Remedy> {
        self.remedies.iter()
    }

    /// Remedy names in corpus order, the shape persisted as the id map.
    pub fn names(&self) -> Vec<String> {
        self.remedies.iter().map(|r| r.name.clone()).collect()
    }

    /// Blake3 fingerprint over names and full texts in order.
    ///
    /// Recorded in the index manifest at build time; a serving process
    /// compares it against the freshly loaded corpus, catching text edits
    /// the id map alone cannot see.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for remedy in &self.remedies {
            hasher.update(remedy.name.as_bytes());
            hasher.update(&[0x1f]);
            hasher.update(remedy.full_text.as_bytes());
            hasher.update(&[0x1e]);
        }
        hasher.finalize().to_hex().to_string()
    }
}

/// Best-effort recovery of a record that failed strict deserialization.
fn salvage_record(record: &serde_json::Value) -> Remedy {
    let field = |key: &str| {
        record
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };
    Remedy {
        id: field("id"),
        name: field("name"),
        full_text: field("full_text"),
        source: field("source"),
        ..Default::default()
    }
}
