//! # similia-index
//!
//! Offline index construction and persisted artifact handling.
//!
//! The builder embeds the corpus, L2-normalizes the rows, and persists
//! three artifacts: the embedding matrix, an ordered id map, and a manifest
//! recording the model, dimensions, and a corpus fingerprint. A serving
//! process reloads them and verifies alignment before trusting semantic
//! mode. Builds replace the artifact set wholesale; never build while
//! serving from the same directory.

pub mod artifacts;
pub mod builder;
pub mod flat_index;
pub mod matrix;

pub use artifacts::Artifacts;
pub use builder::IndexBuilder;
pub use flat_index::FlatIpIndex;
pub use matrix::EmbeddingMatrix;
