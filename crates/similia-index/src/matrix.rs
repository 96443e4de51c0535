use serde::{Deserialize, Serialize};

/// Dense N×D embedding matrix, row i aligned to corpus position i.
///
/// Stored flat; rows are only meaningful together with the corpus they were
/// built from, which is what the manifest checks guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingMatrix {
    dimensions: usize,
    data: Vec<f32>,
}

impl EmbeddingMatrix {
    /// Assemble a matrix from per-document vectors.
    ///
    /// Every vector must have length `dimensions`; mixed lengths indicate a
    /// provider bug and this is only called from the offline builder, so a
    /// debug assertion is enough.
    pub fn from_rows(dimensions: usize, rows: Vec<Vec<f32>>) -> Self {
        let mut data = Vec::with_capacity(rows.len() * dimensions);
        for row in rows {
            debug_assert_eq!(row.len(), dimensions, "row length mismatch");
            data.extend(row);
        }
        Self { dimensions, data }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        if self.dimensions == 0 {
            0
        } else {
            self.data.len() / self.dimensions
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i >= self.rows() {
            return None;
        }
        let start = i * self.dimensions;
        Some(&self.data[start..start + self.dimensions])
    }

    /// L2-normalize every row in place. Zero rows stay zero.
    pub fn normalize_rows(&mut self) {
        let dims = self.dimensions;
        if dims == 0 {
            return;
        }
        for row in self.data.chunks_mut(dims) {
            l2_normalize(row);
        }
    }
}

/// L2-normalize a vector in place; a zero vector is left untouched.
pub fn l2_normalize(vec: &mut [f32]) {
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vec.iter_mut() {
            *v /= norm;
        }
    }
}
