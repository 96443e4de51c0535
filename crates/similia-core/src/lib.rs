//! # similia-core
//!
//! Foundation crate for the similia retrieval engine.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SimiliaConfig;
pub use errors::{SimiliaError, SimiliaResult};
pub use models::{Mode, ModalityValue, RankedCandidate, Remedy};
pub use traits::EmbeddingProvider;
