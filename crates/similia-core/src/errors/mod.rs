//! Error types, one enum per subsystem, unified under [`SimiliaError`].

mod config_error;
mod corpus_error;
mod embedding_error;
mod index_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;
pub use index_error::IndexError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the similia workspace.
#[derive(Debug, thiserror::Error)]
pub enum SimiliaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Workspace-wide result alias.
pub type SimiliaResult<T> = Result<T, SimiliaError>;
