//! Persisted artifact set: embedding matrix, id map, manifest.

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use similia_core::constants::{EMBEDDINGS_FILE, ID_MAP_FILE, MANIFEST_FILE};
use similia_core::errors::{IndexError, SimiliaResult};
use similia_core::models::IndexManifest;
use similia_core::EmbeddingProvider;
use similia_corpus::Corpus;

use crate::matrix::EmbeddingMatrix;

/// The three persisted artifacts, together the serving-side image of an
/// offline build.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub matrix: EmbeddingMatrix,
    /// Remedy names in corpus order; length must equal matrix rows.
    pub id_map: Vec<String>,
    pub manifest: IndexManifest,
}

impl Artifacts {
    /// Write all three artifacts into `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> SimiliaResult<()> {
        std::fs::create_dir_all(dir).map_err(|e| IndexError::PersistFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        write_json(&dir.join(EMBEDDINGS_FILE), &self.matrix)?;
        write_json(&dir.join(ID_MAP_FILE), &self.id_map)?;
        write_json(&dir.join(MANIFEST_FILE), &self.manifest)?;
        info!(dir = %dir.display(), rows = self.manifest.rows, "artifacts saved");
        Ok(())
    }

    /// Load all three artifacts from `dir`.
    pub fn load(dir: &Path) -> SimiliaResult<Self> {
        let matrix: EmbeddingMatrix = read_json(&dir.join(EMBEDDINGS_FILE))?;
        let id_map: Vec<String> = read_json(&dir.join(ID_MAP_FILE))?;
        let manifest: IndexManifest = read_json(&dir.join(MANIFEST_FILE))?;
        Ok(Self {
            matrix,
            id_map,
            manifest,
        })
    }

    /// Check this artifact set against a freshly loaded corpus and the live
    /// embedding provider. Passing means semantic mode can be trusted.
    pub fn verify(&self, corpus: &Corpus, provider: &dyn EmbeddingProvider) -> SimiliaResult<()> {
        if self.manifest.model != provider.name() {
            return Err(IndexError::Misaligned {
                reason: format!(
                    "built with model {:?}, provider is {:?}",
                    self.manifest.model,
                    provider.name()
                ),
            }
            .into());
        }
        if self.manifest.dimensions != provider.dimensions()
            || self.matrix.dimensions() != provider.dimensions()
        {
            return Err(IndexError::DimensionMismatch {
                index_dims: self.manifest.dimensions,
                provider_dims: provider.dimensions(),
            }
            .into());
        }
        if self.matrix.rows() != self.manifest.rows
            || self.id_map.len() != self.manifest.rows
            || corpus.len() != self.manifest.rows
        {
            return Err(IndexError::Misaligned {
                reason: format!(
                    "row counts disagree: matrix {}, id map {}, manifest {}, corpus {}",
                    self.matrix.rows(),
                    self.id_map.len(),
                    self.manifest.rows,
                    corpus.len()
                ),
            }
            .into());
        }
        if self.id_map != corpus.names() {
            return Err(IndexError::Misaligned {
                reason: "id map does not match corpus names".to_string(),
            }
            .into());
        }
        if self.manifest.corpus_fingerprint != corpus.fingerprint() {
            return Err(IndexError::Misaligned {
                reason: "corpus fingerprint changed since build".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> SimiliaResult<()> {
    let raw = serde_json::to_vec(value).map_err(|e| IndexError::PersistFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    std::fs::write(path, raw).map_err(|e| IndexError::PersistFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> SimiliaResult<T> {
    let raw = std::fs::read(path).map_err(|e| IndexError::ArtifactUnavailable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_slice(&raw)
        .map_err(|e| {
            IndexError::ArtifactUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::IndexBuilder;
    use similia_core::config::EmbeddingConfig;
    use similia_core::Remedy;
    use similia_embeddings::HashingProvider;

    fn corpus() -> Corpus {
        Corpus::from_remedies(vec![
            Remedy {
                name: "Aconite".into(),
                full_text: "sudden violent fear restlessness".into(),
                ..Default::default()
            },
            Remedy {
                name: "Belladonna".into(),
                full_text: "throbbing headache heat".into(),
                ..Default::default()
            },
        ])
    }

    fn build(corpus: &Corpus, dims: usize) -> Artifacts {
        let provider = HashingProvider::new(dims);
        IndexBuilder::new(&provider, EmbeddingConfig::default())
            .build(corpus)
            .unwrap()
    }

    #[test]
    fn save_load_round_trip() {
        let corpus = corpus();
        let artifacts = build(&corpus, 64);
        let dir = tempfile::tempdir().unwrap();

        artifacts.save(dir.path()).unwrap();
        let loaded = Artifacts::load(dir.path()).unwrap();

        assert_eq!(loaded.matrix, artifacts.matrix);
        assert_eq!(loaded.id_map, artifacts.id_map);
        assert_eq!(loaded.manifest, artifacts.manifest);
    }

    #[test]
    fn load_missing_dir_is_unavailable() {
        let err = Artifacts::load(Path::new("/nonexistent/artifacts")).unwrap_err();
        assert!(matches!(
            err,
            similia_core::SimiliaError::Index(IndexError::ArtifactUnavailable { .. })
        ));
    }

    #[test]
    fn verify_accepts_matching_corpus() {
        let corpus = corpus();
        let artifacts = build(&corpus, 64);
        let provider = HashingProvider::new(64);
        artifacts.verify(&corpus, &provider).unwrap();
    }

    #[test]
    fn verify_rejects_dimension_change() {
        let corpus = corpus();
        let artifacts = build(&corpus, 64);
        let provider = HashingProvider::new(128);
        let err = artifacts.verify(&corpus, &provider).unwrap_err();
        assert!(matches!(
            err,
            similia_core::SimiliaError::Index(IndexError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn verify_rejects_grown_corpus() {
        let corpus = corpus();
        let artifacts = build(&corpus, 64);

        let mut remedies: Vec<Remedy> = corpus.iter().cloned().collect();
        remedies.push(Remedy {
            name: "Chamomilla".into(),
            ..Default::default()
        });
        let grown = Corpus::from_remedies(remedies);

        let provider = HashingProvider::new(64);
        assert!(artifacts.verify(&grown, &provider).is_err());
    }

    #[test]
    fn verify_rejects_edited_text_with_same_names() {
        let corpus = corpus();
        let artifacts = build(&corpus, 64);

        let edited = Corpus::from_remedies(
            corpus
                .iter()
                .cloned()
                .map(|mut r| {
                    r.full_text.push_str(" edited");
                    r
                })
                .collect(),
        );

        let provider = HashingProvider::new(64);
        // Names still match; only the fingerprint can catch this.
        assert_eq!(edited.names(), artifacts.id_map);
        let err = artifacts.verify(&edited, &provider).unwrap_err();
        assert!(matches!(
            err,
            similia_core::SimiliaError::Index(IndexError::Misaligned { .. })
        ));
    }

    #[test]
    fn empty_corpus_artifacts_verify() {
        let empty = Corpus::from_remedies(vec![]);
        let artifacts = build(&empty, 64);
        let provider = HashingProvider::new(64);
        artifacts.verify(&empty, &provider).unwrap();
    }
}
