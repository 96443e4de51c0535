//! # similia-retrieval
//!
//! The hybrid retrieval engine. Given a free-text complaint, returns a
//! bounded, deduplicated, percent-scored candidate list for practitioner
//! review.
//!
//! The engine operates in exactly one of two modes, decided once at
//! construction: semantic (vector search against the persisted index) or
//! lexical (token-overlap scoring over the corpus). Any semantic failure
//! after construction downgrades the engine to lexical permanently —
//! callers never see the failure, only lexical-quality results.

pub mod engine;
pub mod ranking;
pub mod search;

pub use engine::RetrievalEngine;
