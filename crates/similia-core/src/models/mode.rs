use serde::Serialize;

/// The engine's active retrieval strategy, decided once at construction.
///
/// A runtime semantic failure flips the engine to `Lexical` for the rest of
/// its lifetime; the mode is never re-evaluated per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Vector search against the persisted inner-product index.
    Semantic,
    /// Token-overlap scoring over the corpus text.
    Lexical,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Semantic => write!(f, "semantic"),
            Mode::Lexical => write!(f, "lexical"),
        }
    }
}
