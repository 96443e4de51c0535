/// Similia system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of characters of a remedy's full text that are embedded.
/// Longer texts are truncated before the embedding call.
pub const MAX_EMBED_CHARS: usize = 4000;

/// Minimum character length for a query token to participate in lexical
/// scoring. Tokens of 2 characters or fewer are dropped.
pub const MIN_LEXICAL_TOKEN_CHARS: usize = 3;

/// Maximum number of candidates returned from a single query.
pub const DEFAULT_MAX_CANDIDATES: usize = 50;

/// How many positions semantic search requests from the index per query.
pub const DEFAULT_SEMANTIC_TOP_K: usize = 50;

/// Percentage points added per matched rubric in semantic mode.
pub const SEMANTIC_RUBRIC_POINTS: f64 = 5.0;

/// Raw increment per matched rubric in lexical mode, fed through the
/// saturating `kb / (1 + kb)` ratio before blending.
pub const LEXICAL_RUBRIC_INCREMENT: f64 = 2.0;

/// Lexical blend weights. Must sum to 1.
pub const LEXICAL_TOKEN_WEIGHT: f64 = 0.6;
pub const LEXICAL_RUBRIC_WEIGHT: f64 = 0.4;

/// Confidence percent ceiling for both modes. Never reaches 100.0.
pub const PERCENT_CEILING: f64 = 99.9;

/// Confidence percent floor in lexical mode.
pub const LEXICAL_PERCENT_FLOOR: f64 = 1.0;

/// Default embedding-service timeout in seconds. A timeout is treated as a
/// service failure, not retried.
pub const DEFAULT_EMBED_TIMEOUT_SECS: u64 = 10;

/// Persisted artifact file names, written and read relative to the
/// configured artifacts directory.
pub const EMBEDDINGS_FILE: &str = "embeddings.json";
pub const MANIFEST_FILE: &str = "index_manifest.json";
pub const ID_MAP_FILE: &str = "id_map.json";
