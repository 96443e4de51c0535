/// Embedding provider errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("building embedding client: {reason}")]
    ClientBuild { reason: String },

    #[error("embedding service unavailable: {endpoint}")]
    ServiceUnavailable { endpoint: String },

    #[error("embedding request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
