//! Founder story: the opening and closing clauses of a transcript.

use super::text::{char_len, normalize_whitespace, split_clauses, truncate_chars};

/// Hard cap on a composed story.
pub const MAX_STORY_CHARS: usize = 1200;

const VERBATIM_STORY_CHARS: usize = 400;
const EDGE_CLAUSES: usize = 3;

/// Compress a transcript into a short founder narrative.
pub fn compose_founder_story(transcript: &str) -> String {
    let text = normalize_whitespace(transcript);
    if char_len(&text) <= VERBATIM_STORY_CHARS {
        return text;
    }

    let clauses = split_clauses(&text);
    let start = clauses
        .iter()
        .take(EDGE_CLAUSES)
        .cloned()
        .collect::<Vec<_>>()
        .join(". ");
    let end = clauses[clauses.len().saturating_sub(EDGE_CLAUSES)..].join(". ");

    let story = format!("{}... {}", start, end);
    truncate_chars(&story, MAX_STORY_CHARS).to_string()
}
