//! Ranking & boost layer: merge retrieval scores with rubric boosts,
//! normalize to a bounded confidence percent, dedupe, sort, cap.
//!
//! One canonical blending scheme per mode:
//! - semantic: rubric matches add flat percentage points after
//!   max-normalization, clamped to [0, 99.9];
//! - lexical: a 0.6/0.4 blend of token score and the saturating rubric
//!   ratio `kb / (1 + kb)`, max-normalized and clamped to [1.0, 99.9].

pub mod boost;

use std::collections::HashSet;

use similia_core::constants::{
    LEXICAL_PERCENT_FLOOR, LEXICAL_RUBRIC_INCREMENT, LEXICAL_RUBRIC_WEIGHT, LEXICAL_TOKEN_WEIGHT,
    PERCENT_CEILING, SEMANTIC_RUBRIC_POINTS,
};
use similia_core::RankedCandidate;
use similia_corpus::Corpus;

/// Rank semantic hits: `(position, inner_product)` pairs.
///
/// `percent = clamp(raw / max_raw × 100 + 5.0 × rubric_matches, 0, 99.9)`.
/// The rubric boost affects the displayed percent, not the ordering; the
/// sort key is the raw inner product.
pub fn rank_semantic(
    corpus: &Corpus,
    hits: &[(usize, f32)],
    query: &str,
    max_candidates: usize,
) -> Vec<RankedCandidate> {
    let scores: Vec<(usize, f64)> = hits.iter().map(|(p, s)| (*p, f64::from(*s))).collect();
    let (items, max_raw) = dedupe_sort_cap(corpus, scores, max_candidates);

    items
        .into_iter()
        .enumerate()
        .filter_map(|(rank, (position, raw_score))| {
            corpus.get(position).map(|remedy| {
                let points =
                    boost::rubric_matches(remedy, query) as f64 * SEMANTIC_RUBRIC_POINTS;
                let percent = ((raw_score / max_raw) * 100.0 + points).clamp(0.0, PERCENT_CEILING);
                RankedCandidate {
                    position,
                    remedy: remedy.clone(),
                    raw_score,
                    rubric_boost: points,
                    percent,
                    rank,
                }
            })
        })
        .collect()
}

/// Rank lexical scores: `(position, token_score)` pairs over the corpus.
///
/// `combined = 0.6·token + 0.4·kb/(1+kb)` with `kb = 2.0` per matched
/// rubric; `percent = clamp(combined / max_combined × 100, 1.0, 99.9)`.
/// Here the blend happens before sorting, so rubric matches can reorder —
/// the raw (pre-normalization) score in lexical mode IS the combined value.
pub fn rank_lexical(
    corpus: &Corpus,
    token_scores: &[(usize, f64)],
    query: &str,
    max_candidates: usize,
) -> Vec<RankedCandidate> {
    let blended: Vec<(usize, f64)> = token_scores
        .iter()
        .filter_map(|(position, token_score)| {
            corpus.get(*position).map(|remedy| {
                let kb = boost::rubric_matches(remedy, query) as f64 * LEXICAL_RUBRIC_INCREMENT;
                let combined =
                    LEXICAL_TOKEN_WEIGHT * token_score + LEXICAL_RUBRIC_WEIGHT * (kb / (1.0 + kb));
                (*position, combined)
            })
        })
        .collect();

    let (items, max_raw) = dedupe_sort_cap(corpus, blended, max_candidates);

    items
        .into_iter()
        .enumerate()
        .filter_map(|(rank, (position, raw_score))| {
            corpus.get(position).map(|remedy| {
                let kb = boost::rubric_matches(remedy, query) as f64 * LEXICAL_RUBRIC_INCREMENT;
                let percent = ((raw_score / max_raw) * 100.0)
                    .clamp(LEXICAL_PERCENT_FLOOR, PERCENT_CEILING);
                RankedCandidate {
                    position,
                    remedy: remedy.clone(),
                    raw_score,
                    rubric_boost: kb,
                    percent,
                    rank,
                }
            })
        })
        .collect()
}

/// Dedupe by position, stable-sort descending by score with corpus-order
/// ties, cap to `max_candidates`. Returns the surviving items and the
/// maximum raw score of the set (floored at epsilon so normalization never
/// divides by zero).
fn dedupe_sort_cap(
    corpus: &Corpus,
    scores: Vec<(usize, f64)>,
    max_candidates: usize,
) -> (Vec<(usize, f64)>, f64) {
    let mut seen = HashSet::new();
    let mut items: Vec<(usize, f64)> = scores
        .into_iter()
        .filter(|(position, _)| *position < corpus.len() && seen.insert(*position))
        .collect();

    // Corpus order first, then a stable sort by score, so equal scores
    // resolve to original corpus order.
    items.sort_by_key(|(position, _)| *position);
    items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    items.truncate(max_candidates);

    let max_raw = items
        .iter()
        .map(|(_, s)| *s)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(f64::EPSILON);

    (items, max_raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similia_core::Remedy;

    fn corpus() -> Corpus {
        Corpus::from_remedies(vec![
            Remedy {
                name: "Aconite".into(),
                full_text: "sudden violent fear restlessness".into(),
                rubrics: vec!["sudden fear".into()],
                ..Default::default()
            },
            Remedy {
                name: "Belladonna".into(),
                full_text: "throbbing headache heat redness".into(),
                rubrics: vec!["throbbing headache".into()],
                ..Default::default()
            },
            Remedy {
                name: "Chamomilla".into(),
                full_text: "irritability anger in children".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn semantic_percent_within_bounds() {
        let corpus = corpus();
        let hits = vec![(0, 0.9_f32), (1, 0.5), (2, -0.3)];
        let ranked = rank_semantic(&corpus, &hits, "sudden fear", 50);
        for c in &ranked {
            assert!(c.percent >= 0.0 && c.percent <= 99.9, "got {}", c.percent);
        }
    }

    #[test]
    fn semantic_boost_adds_points_not_reordering() {
        let corpus = corpus();
        // Belladonna scores higher semantically; Aconite's rubric matches.
        let hits = vec![(1, 0.9_f32), (0, 0.8)];
        let ranked = rank_semantic(&corpus, &hits, "sudden fear", 50);
        assert_eq!(ranked[0].position, 1, "order follows raw score");
        let aconite = ranked.iter().find(|c| c.position == 0).unwrap();
        assert_eq!(aconite.rubric_boost, 5.0);
    }

    #[test]
    fn semantic_top_hit_without_boost_just_under_hundred() {
        let corpus = corpus();
        let ranked = rank_semantic(&corpus, &[(2, 0.7_f32)], "no rubric here", 50);
        // raw/max == 1.0 for the single candidate.
        assert!((ranked[0].percent - 99.9).abs() < 1e-9);
    }

    #[test]
    fn lexical_rubric_match_can_reorder() {
        let corpus = corpus();
        // Identical token scores; only Aconite's rubric appears in the query.
        let scores = vec![(0, 0.2), (1, 0.2)];
        let ranked = rank_lexical(&corpus, &scores, "sudden fear tonight", 50);
        assert_eq!(ranked[0].position, 0);
        assert!(ranked[0].raw_score > ranked[1].raw_score);
    }

    #[test]
    fn lexical_percent_floor_is_one() {
        let corpus = corpus();
        let scores = vec![(0, 0.5), (1, 0.0), (2, 0.0)];
        let ranked = rank_lexical(&corpus, &scores, "unrelated complaint", 50);
        let worst = ranked.last().unwrap();
        assert!((worst.percent - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lexical_ceiling_is_just_under_hundred() {
        let corpus = corpus();
        let ranked = rank_lexical(&corpus, &[(0, 0.75)], "sudden fear and restlessness", 50);
        assert!((ranked[0].percent - 99.9).abs() < 1e-9);
    }

    #[test]
    fn duplicate_positions_collapse() {
        let corpus = corpus();
        let hits = vec![(0, 0.9_f32), (0, 0.8), (1, 0.5)];
        let ranked = rank_semantic(&corpus, &hits, "", 50);
        assert_eq!(ranked.len(), 2);
        let positions: Vec<usize> = ranked.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn out_of_bounds_positions_dropped() {
        let corpus = corpus();
        let hits = vec![(97, 0.9_f32), (1, 0.5)];
        let ranked = rank_semantic(&corpus, &hits, "", 50);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].position, 1);
    }

    #[test]
    fn cap_limits_output() {
        let corpus = corpus();
        let scores = vec![(0, 0.3), (1, 0.2), (2, 0.1)];
        let ranked = rank_lexical(&corpus, &scores, "", 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn ties_keep_corpus_order() {
        let corpus = corpus();
        let hits = vec![(2, 0.5_f32), (0, 0.5), (1, 0.5)];
        let ranked = rank_semantic(&corpus, &hits, "", 50);
        let positions: Vec<usize> = ranked.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn rank_field_matches_list_order() {
        let corpus = corpus();
        let scores = vec![(0, 0.1), (1, 0.9), (2, 0.5)];
        let ranked = rank_lexical(&corpus, &scores, "", 50);
        for (i, c) in ranked.iter().enumerate() {
            assert_eq!(c.rank, i);
        }
    }

    #[test]
    fn empty_input_is_empty_output() {
        let corpus = corpus();
        assert!(rank_semantic(&corpus, &[], "query", 50).is_empty());
        assert!(rank_lexical(&corpus, &[], "query", 50).is_empty());
    }

    #[test]
    fn all_negative_semantic_scores_floor_at_zero() {
        let corpus = corpus();
        let hits = vec![(0, -0.2_f32), (1, -0.9)];
        let ranked = rank_semantic(&corpus, &hits, "", 50);
        for c in &ranked {
            assert!(c.percent >= 0.0);
            assert!(c.percent.is_finite());
        }
    }
}
