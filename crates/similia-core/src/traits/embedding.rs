use crate::errors::SimiliaResult;

/// Embedding generation provider.
///
/// Injected into the index builder and the retrieval engine at
/// construction, so tests can substitute a deterministic implementation.
/// The same model/dimension must be used at build time and query time; the
/// manifest check relies on `name` and `dimensions` being stable.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> SimiliaResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> SimiliaResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Stable model identifier, recorded in the index manifest.
    fn name(&self) -> &str;

    /// Whether this provider is currently reachable.
    fn is_available(&self) -> bool;
}
