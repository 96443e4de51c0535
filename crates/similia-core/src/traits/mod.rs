mod embedding;

pub use embedding::EmbeddingProvider;
