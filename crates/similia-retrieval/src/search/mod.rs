//! Retrieval strategies: one per engine mode.

pub mod lexical;
pub mod semantic;
