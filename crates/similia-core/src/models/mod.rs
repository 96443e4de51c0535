//! Shared data models.

mod candidate;
mod manifest;
mod mode;
mod remedy;

pub use candidate::RankedCandidate;
pub use manifest::IndexManifest;
pub use mode::Mode;
pub use remedy::{ModalityValue, Remedy};
