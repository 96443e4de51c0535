//! Rubric matching: case-insensitive substring checks of a remedy's
//! diagnostic phrases against the raw query text.

use similia_core::Remedy;

/// Count the remedy's rubric phrases present in the query.
///
/// Exact substring matching, case folded. Rubrics are short fixed phrases
/// expected verbatim in complaint language. Empty rubrics never match.
pub fn rubric_matches(remedy: &Remedy, query: &str) -> usize {
    let query = query.to_lowercase();
    remedy
        .rubrics
        .iter()
        .filter(|rubric| !rubric.is_empty() && query.contains(&rubric.to_lowercase()))
        .count()
}
