use serde::Serialize;

use super::Remedy;

/// One scored suggestion in a query response.
///
/// Created per query and discarded with the response; neither the query text
/// nor candidate lists are ever persisted. `raw_score` and `rubric_boost`
/// are kept alongside the final percent so a reviewer can audit how the
/// number was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    /// Position of the remedy in corpus order.
    pub position: usize,
    pub remedy: Remedy,
    /// Pre-normalization retrieval score. Inner product in semantic mode,
    /// blended token/rubric score in lexical mode.
    pub raw_score: f64,
    /// Rubric contribution before blending/normalization.
    pub rubric_boost: f64,
    /// Final confidence percent, clamped to the active mode's bounds.
    pub percent: f64,
    /// Zero-based rank in the returned list.
    pub rank: usize,
}
