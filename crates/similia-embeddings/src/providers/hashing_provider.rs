//! Deterministic local embedding provider.
//!
//! Hashes terms into fixed-dimension buckets weighted by term frequency.
//! Not semantically rich, but fully deterministic and always available —
//! the substitute embedding function the engine's tests inject.

use std::collections::HashMap;

use similia_core::errors::SimiliaResult;
use similia_core::EmbeddingProvider;

/// Term-hashing embedding provider.
///
/// Similar texts share term buckets and therefore score a higher inner
/// product, which is all the self-similarity and alignment tests need.
pub struct HashingProvider {
    dimensions: usize,
}

impl HashingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a hash of a term, reduced to a bucket index.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let terms: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() >= 2)
            .map(str::to_lowercase)
            .collect();
        if terms.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut counts: HashMap<&str, f32> = HashMap::new();
        for term in &terms {
            *counts.entry(term.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in counts {
            // Longer terms carry more signal; short ones are likely noise.
            let weight = (count / total) * (1.0 + (term.len() as f32).ln());
            vec[Self::bucket(term, self.dimensions)] += weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl EmbeddingProvider for HashingProvider {
    fn embed(&self, text: &str) -> SimiliaResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> SimiliaResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-local"
    }

    fn is_available(&self) -> bool {
        true
    }
}
