/// Persisted index artifact errors.
///
/// Every variant here means "semantic mode cannot be trusted"; the engine
/// answers all of them the same way, by serving lexical.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("artifact missing or unreadable at {path}: {reason}")]
    ArtifactUnavailable { path: String, reason: String },

    #[error("failed to persist artifact at {path}: {reason}")]
    PersistFailed { path: String, reason: String },

    #[error("index misaligned with corpus: {reason}")]
    Misaligned { reason: String },

    #[error("index dimension {index_dims} does not match provider dimension {provider_dims}")]
    DimensionMismatch {
        index_dims: usize,
        provider_dims: usize,
    },
}
