//! Semantic vector search against the persisted inner-product index.

use std::collections::HashSet;

use tracing::debug;

use similia_core::errors::SimiliaResult;
use similia_core::EmbeddingProvider;
use similia_index::{matrix::l2_normalize, FlatIpIndex};

/// Embed the query, normalize it, and take the top-k inner-product matches.
///
/// Positions outside `corpus_len` are discarded and duplicates removed, so
/// the result is a clean ordered `(position, raw_score)` list with scores
/// in [-1, 1]. Embedding failures propagate to the engine, which downgrades.
pub fn search(
    index: &FlatIpIndex,
    provider: &dyn EmbeddingProvider,
    query: &str,
    k: usize,
    corpus_len: usize,
) -> SimiliaResult<Vec<(usize, f32)>> {
    let mut query_vec = provider.embed(query)?;
    l2_normalize(&mut query_vec);

    let hits = index.search(&query_vec, k);
    debug!(hits = hits.len(), k, "semantic search");

    let mut seen = HashSet::new();
    Ok(hits
        .into_iter()
        .filter(|(position, _)| *position < corpus_len && seen.insert(*position))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use similia_core::errors::EmbeddingError;
    use similia_index::EmbeddingMatrix;

    /// Fixed-vector provider for exercising the search plumbing.
    struct FixedProvider {
        vector: Vec<f32>,
    }

    impl EmbeddingProvider for FixedProvider {
        fn embed(&self, _text: &str) -> SimiliaResult<Vec<f32>> {
            Ok(self.vector.clone())
        }
        fn dimensions(&self) -> usize {
            self.vector.len()
        }
        fn name(&self) -> &str {
            "fixed"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    struct FailingProvider;

    impl EmbeddingProvider for FailingProvider {
        fn embed(&self, _text: &str) -> SimiliaResult<Vec<f32>> {
            Err(EmbeddingError::RequestFailed {
                reason: "mock outage".to_string(),
            }
            .into())
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "failing"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    fn index(rows: Vec<Vec<f32>>) -> FlatIpIndex {
        let dims = rows.first().map(|r| r.len()).unwrap_or(0);
        FlatIpIndex::new(Arc::new(EmbeddingMatrix::from_rows(dims, rows)))
    }

    #[test]
    fn normalizes_query_before_search() {
        let idx = index(vec![vec![1.0, 0.0]]);
        // Deliberately unnormalized query vector.
        let provider = FixedProvider {
            vector: vec![10.0, 0.0],
        };
        let hits = search(&idx, &provider, "q", 1, 1).unwrap();
        assert_eq!(hits.len(), 1);
        assert!((hits[0].1 - 1.0).abs() < 1e-6, "score must stay in [-1, 1]");
    }

    #[test]
    fn discards_positions_outside_corpus() {
        // Index has two rows but the corpus claims only one entry.
        let idx = index(vec![vec![1.0, 0.0], vec![0.9, 0.1]]);
        let provider = FixedProvider {
            vector: vec![1.0, 0.0],
        };
        let hits = search(&idx, &provider, "q", 2, 1).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 0);
    }

    #[test]
    fn embed_failure_propagates() {
        let idx = index(vec![vec![1.0, 0.0]]);
        assert!(search(&idx, &FailingProvider, "q", 1, 1).is_err());
    }

    #[test]
    fn ordered_by_score_descending() {
        let idx = index(vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![0.7, 0.7]]);
        let provider = FixedProvider {
            vector: vec![1.0, 0.0],
        };
        let hits = search(&idx, &provider, "q", 3, 3).unwrap();
        let scores: Vec<f32> = hits.iter().map(|h| h.1).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(hits[0].0, 1);
    }
}
