//! Small text helpers shared by the index builder and the retrieval engine.

/// Truncate to at most `max_chars` characters, respecting char boundaries.
///
/// Bounds per-call embedding cost and keeps requests inside the service's
/// input limit.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
