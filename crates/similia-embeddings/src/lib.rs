//! # similia-embeddings
//!
//! Implementations of [`similia_core::EmbeddingProvider`].
//!
//! [`HttpProvider`] talks to the external text→vector service over HTTP with
//! a hard timeout. [`HashingProvider`] produces deterministic local vectors
//! with no external dependencies, for tests and air-gapped runs. Neither is
//! a runtime fallback for the other: when the service is unavailable the
//! retrieval engine switches to lexical search, not to a weaker vector.

pub mod providers;

pub use providers::{HashingProvider, HttpProvider};
