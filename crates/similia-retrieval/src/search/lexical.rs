//! Lexical token-overlap scoring.
//!
//! For every remedy: `score = distinct matching query tokens / word count`.
//! Favors shorter documents with denser term matches, never divides by
//! zero, and is fully deterministic given corpus and query.

use std::collections::BTreeSet;

use similia_core::constants::MIN_LEXICAL_TOKEN_CHARS;
use similia_corpus::Corpus;

/// Distinct lowercase query tokens long enough to carry signal.
fn query_tokens(query: &str) -> BTreeSet<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_LEXICAL_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Score every corpus entry against the query.
///
/// Returns `(position, token_score)` for the whole corpus in corpus order.
/// Entries with no matching tokens score 0.0 and stay in the list; the
/// ranking layer decides what survives the cap.
pub fn search(corpus: &Corpus, query: &str) -> Vec<(usize, f64)> {
    let tokens = query_tokens(query);

    corpus
        .iter()
        .enumerate()
        .map(|(position, remedy)| {
            let text = remedy.full_text.to_lowercase();
            let matched = tokens.iter().filter(|t| text.contains(t.as_str())).count();
            let score = matched as f64 / remedy.word_count() as f64;
            (position, score)
        })
        .collect()
}
