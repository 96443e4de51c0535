//! Offline index builder: truncate → batch-embed → normalize → manifest.

use chrono::Utc;
use tracing::info;

use similia_core::config::EmbeddingConfig;
use similia_core::errors::SimiliaResult;
use similia_core::models::IndexManifest;
use similia_core::text::truncate_chars;
use similia_core::EmbeddingProvider;
use similia_corpus::Corpus;

use crate::artifacts::Artifacts;
use crate::matrix::EmbeddingMatrix;

/// Builds the persisted artifact set from a corpus and an embedding
/// provider. Runs offline, separate from serving.
pub struct IndexBuilder<'a> {
    provider: &'a dyn EmbeddingProvider,
    config: EmbeddingConfig,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(provider: &'a dyn EmbeddingProvider, config: EmbeddingConfig) -> Self {
        Self { provider, config }
    }

    /// Embed every corpus entry and assemble the artifact set.
    ///
    /// An empty corpus is not a failure: the result holds an empty matrix
    /// and id map, and verification against the same empty corpus passes.
    pub fn build(&self, corpus: &Corpus) -> SimiliaResult<Artifacts> {
        let texts: Vec<String> = corpus
            .iter()
            .map(|r| truncate_chars(&r.full_text, self.config.max_chars).to_string())
            .collect();

        info!(
            documents = texts.len(),
            model = self.provider.name(),
            dims = self.provider.dimensions(),
            "embedding corpus"
        );

        let rows = self.provider.embed_batch(&texts)?;
        let mut matrix = EmbeddingMatrix::from_rows(self.provider.dimensions(), rows);
        matrix.normalize_rows();

        let manifest = IndexManifest {
            model: self.provider.name().to_string(),
            dimensions: self.provider.dimensions(),
            rows: matrix.rows(),
            corpus_fingerprint: corpus.fingerprint(),
            built_at: Utc::now(),
        };

        info!(rows = manifest.rows, "index build complete");

        Ok(Artifacts {
            matrix,
            id_map: corpus.names(),
            manifest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
                full_text: "throbbing headache heat redness".into(),
                ..Default::default()
            },
        ])
    }

    fn build(corpus: &Corpus) -> Artifacts {
        let provider = HashingProvider::new(64);
        IndexBuilder::new(&provider, EmbeddingConfig::default())
            .build(corpus)
            .unwrap()
    }

    #[test]
    fn matrix_aligns_with_corpus() {
        let corpus = corpus();
        let artifacts = build(&corpus);
        assert_eq!(artifacts.matrix.rows(), corpus.len());
        assert_eq!(artifacts.id_map, corpus.names());
        assert_eq!(artifacts.manifest.rows, corpus.len());
        assert_eq!(artifacts.manifest.corpus_fingerprint, corpus.fingerprint());
    }

    #[test]
    fn rows_are_normalized() {
        let artifacts = build(&corpus());
        for i in 0..artifacts.matrix.rows() {
            let row = artifacts.matrix.row(i).unwrap();
            let norm: f32 = row.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn empty_corpus_builds_empty_artifacts() {
        let empty = Corpus::from_remedies(vec![]);
        let artifacts = build(&empty);
        assert!(artifacts.matrix.is_empty());
        assert!(artifacts.id_map.is_empty());
        assert_eq!(artifacts.manifest.rows, 0);
    }

    #[test]
    fn manifest_records_model_identity() {
        let artifacts = build(&corpus());
        assert_eq!(artifacts.manifest.model, "hashing-local");
        assert_eq!(artifacts.manifest.dimensions, 64);
    }
}
