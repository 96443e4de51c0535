//! RetrievalEngine: mode selection, the per-request pipeline, and the
//! one-way semantic→lexical downgrade.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use similia_core::config::RetrievalConfig;
use similia_core::errors::{RetrievalError, SimiliaError, SimiliaResult};
use similia_core::{EmbeddingProvider, Mode, RankedCandidate};
use similia_corpus::Corpus;
use similia_index::{Artifacts, FlatIpIndex};

use crate::ranking;
use crate::search::{lexical, semantic};

/// The hybrid retrieval engine.
///
/// All state is read-only after construction except the one-way `degraded`
/// flag, so a single engine can serve concurrent callers without locking.
/// The embedding provider is injected, never a global: tests substitute a
/// deterministic one.
pub struct RetrievalEngine {
    corpus: Arc<Corpus>,
    provider: Arc<dyn EmbeddingProvider>,
    /// Present only when artifacts loaded and verified at construction.
    index: Option<FlatIpIndex>,
    /// Set on the first runtime semantic failure; never cleared.
    degraded: AtomicBool,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    /// Construct the engine, deciding the mode exactly once.
    ///
    /// Semantic mode requires the provider to be reachable AND the artifact
    /// set to verify against the freshly loaded corpus. Anything else —
    /// including `artifacts` being `None` because loading failed upstream —
    /// selects lexical mode. The downgrade is logged here, once, and is
    /// never a caller-visible error.
    pub fn new(
        corpus: Arc<Corpus>,
        provider: Arc<dyn EmbeddingProvider>,
        artifacts: Option<Artifacts>,
        config: RetrievalConfig,
    ) -> Self {
        let index = match artifacts {
            Some(artifacts) if provider.is_available() => {
                match artifacts.verify(&corpus, provider.as_ref()) {
                    Ok(()) => {
                        info!(
                            rows = artifacts.matrix.rows(),
                            model = %artifacts.manifest.model,
                            "semantic mode selected"
                        );
                        Some(FlatIpIndex::new(Arc::new(artifacts.matrix)))
                    }
                    Err(e) => {
                        warn!(error = %e, "index failed verification, serving lexical");
                        None
                    }
                }
            }
            Some(_) => {
                warn!("embedding service unreachable, serving lexical");
                None
            }
            None => {
                info!("no index artifacts, serving lexical");
                None
            }
        };

        Self {
            corpus,
            provider,
            index,
            degraded: AtomicBool::new(false),
            config,
        }
    }

    /// Convenience constructor that loads artifacts from a directory,
    /// treating any load failure as "no artifacts".
    pub fn from_artifacts_dir(
        corpus: Arc<Corpus>,
        provider: Arc<dyn EmbeddingProvider>,
        artifacts_dir: &Path,
        config: RetrievalConfig,
    ) -> Self {
        let artifacts = match Artifacts::load(artifacts_dir) {
            Ok(artifacts) => Some(artifacts),
            Err(e) => {
                warn!(
                    dir = %artifacts_dir.display(),
                    error = %e,
                    "failed to load index artifacts"
                );
                None
            }
        };
        Self::new(corpus, provider, artifacts, config)
    }

    /// The currently active mode.
    pub fn mode(&self) -> Mode {
        if self.index.is_some() && !self.degraded.load(Ordering::Acquire) {
            Mode::Semantic
        } else {
            Mode::Lexical
        }
    }

    /// Semantic search: embed the query, take the top-k inner-product
    /// matches. Fails if the embedding call fails; the caller (the
    /// pipeline) downgrades on failure.
    pub fn semantic_search(&self, query: &str, k: usize) -> SimiliaResult<Vec<(usize, f32)>> {
        let index = self.index.as_ref().ok_or_else(|| {
            SimiliaError::Retrieval(RetrievalError::SearchFailed {
                reason: "no semantic index loaded".to_string(),
            })
        })?;
        semantic::search(index, self.provider.as_ref(), query, k, self.corpus.len())
    }

    /// Lexical search over the whole corpus. Infallible and deterministic.
    pub fn lexical_search(&self, query: &str) -> Vec<(usize, f64)> {
        lexical::search(&self.corpus, query)
    }

    /// The full per-request pipeline: route by mode, boost, normalize,
    /// dedupe, sort, cap.
    ///
    /// Returns `Err(EmptyQuery)` for blank input and `Ok(vec![])` for a
    /// well-formed query with no candidates (e.g. an empty corpus) — two
    /// distinct signals. The query text is processed ephemerally: nothing
    /// about it is retained after this call returns.
    pub fn compute_candidates(&self, query: &str) -> SimiliaResult<Vec<RankedCandidate>> {
        if query.trim().is_empty() {
            return Err(RetrievalError::EmptyQuery.into());
        }
        if self.corpus.is_empty() {
            return Ok(Vec::new());
        }

        if self.mode() == Mode::Semantic {
            match self.semantic_search(query, self.config.semantic_top_k) {
                Ok(hits) => {
                    let ranked =
                        ranking::rank_semantic(&self.corpus, &hits, query, self.config.max_candidates);
                    debug!(candidates = ranked.len(), mode = %Mode::Semantic, "query complete");
                    return Ok(ranked);
                }
                Err(e) => self.downgrade(&e),
            }
        }

        let scores = self.lexical_search(query);
        let ranked = ranking::rank_lexical(&self.corpus, &scores, query, self.config.max_candidates);
        debug!(candidates = ranked.len(), mode = %Mode::Lexical, "query complete");
        Ok(ranked)
    }

    /// Flip the one-way degrade flag. Logged exactly once; subsequent
    /// requests go straight to lexical without touching the semantic path.
    fn downgrade(&self, error: &SimiliaError) {
        if !self.degraded.swap(true, Ordering::AcqRel) {
            warn!(error = %error, "semantic path failed, serving lexical permanently");
        }
    }
}
