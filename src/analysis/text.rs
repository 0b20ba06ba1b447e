//! Lexical sentence segmentation shared by every analysis step.

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid regex"));

// A clause boundary needs whitespace after the punctuation, so "3.5" or "node.js"
// stay inside one clause.
static CLAUSE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s").expect("Invalid regex"));

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into sentences on runs of `.`, `!` and `?`.
///
/// Whitespace is normalized first. Pieces are trimmed and empty ones dropped;
/// order is preserved.
pub fn segment(text: &str) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    SENTENCE_END
        .split(&normalized)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into clauses on `[.!?]+` followed by whitespace.
pub fn split_clauses(text: &str) -> Vec<String> {
    let normalized = normalize_whitespace(text);
    CLAUSE_END
        .split(&normalized)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Length in characters.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
