/// Retrieval pipeline errors.
///
/// An empty candidate list is NOT an error — callers get `Ok(vec![])`.
/// The only user-visible rejection is a blank query.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("empty query: nothing to score")]
    EmptyQuery,

    #[error("search failed: {reason}")]
    SearchFailed { reason: String },
}
