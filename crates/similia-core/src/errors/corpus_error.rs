/// Corpus store errors.
///
/// Individual malformed records never raise — they default to empty fields.
/// Only a missing or wholly unparsable source is an error.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus unavailable at {path}: {reason}")]
    Unavailable { path: String, reason: String },
}
