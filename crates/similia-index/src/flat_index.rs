//! Exact inner-product search over the normalized embedding matrix.
//!
//! Brute-force scan: the corpus is a few hundred entries, so exact search
//! is cheaper and simpler than any approximate structure.

use std::sync::Arc;

use crate::matrix::EmbeddingMatrix;

/// Read-only exact nearest-neighbor index, ranked by inner product
/// (cosine-equivalent, since rows and queries are unit-normalized).
#[derive(Debug, Clone)]
pub struct FlatIpIndex {
    matrix: Arc<EmbeddingMatrix>,
}

impl FlatIpIndex {
    pub fn new(matrix: Arc<EmbeddingMatrix>) -> Self {
        Self { matrix }
    }

    pub fn len(&self) -> usize {
        self.matrix.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.matrix.dimensions()
    }

    /// Top-k rows by inner product with `query`, descending.
    ///
    /// Returns `(position, score)` pairs. Positions are unique by
    /// construction; ties keep row order (stable sort) so results are
    /// deterministic.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(usize, f32)> {
        if k == 0 || self.matrix.is_empty() || query.len() != self.matrix.dimensions() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f32)> = (0..self.matrix.rows())
            .filter_map(|i| {
                self.matrix
                    .row(i)
                    .map(|row| (i, row.iter().zip(query).map(|(a, b)| a * b).sum()))
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        scored
    }
}
