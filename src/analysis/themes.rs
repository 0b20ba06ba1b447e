//! Theme scanning and content-nature classification across a channel's videos.

use super::text::{char_len, segment};
use std::fmt::Write;

/// Marker words tallied per video, in ranking tie-break order.
pub const THEME_MARKERS: [&str; 17] = [
    "learn",
    "how",
    "tutorial",
    "guide",
    "tips",
    "tricks",
    "explain",
    "understand",
    "beginner",
    "advanced",
    "review",
    "comparison",
    "best",
    "worst",
    "free",
    "paid",
    "tool",
];

const MAX_TOPICS: usize = 50;
const MAX_RANKED: usize = 10;

/// Number of scanned videos mentioning each marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTally {
    counts: [usize; THEME_MARKERS.len()],
}

impl KeywordTally {
    /// Videos that mentioned `marker` (0 for words outside the vocabulary).
    pub fn count(&self, marker: &str) -> usize {
        THEME_MARKERS
            .iter()
            .position(|m| *m == marker)
            .map(|i| self.counts[i])
            .unwrap_or(0)
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.count(marker) > 0
    }

    /// Markers seen at least once, most frequent first, ties in vocabulary order.
    pub fn ranked(&self) -> Vec<(&'static str, usize)> {
        let mut entries: Vec<(&'static str, usize)> = THEME_MARKERS
            .iter()
            .zip(self.counts.iter())
            .filter(|(_, count)| **count > 0)
            .map(|(marker, count)| (*marker, *count))
            .collect();
        // sort_by is stable, so equal counts keep vocabulary order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(MAX_RANKED);
        entries
    }

    /// Record one video's transcript. Matching is substring-based on the lower-cased
    /// text, so "how" also counts inside "show".
    fn record(&mut self, transcript: &str) {
        let lower = transcript.to_lowercase();
        for (i, marker) in THEME_MARKERS.iter().enumerate() {
            if lower.contains(marker) {
                self.counts[i] += 1;
            }
        }
    }
}

/// Content-type labels implied by a tally.
pub fn content_types(tally: &KeywordTally) -> Vec<&'static str> {
    let mut types = Vec::new();
    if tally.contains("tutorial") || tally.contains("how") {
        types.push("Tutorial/Educational");
    }
    if tally.contains("review") || tally.contains("comparison") {
        types.push("Reviews");
    }
    if tally.contains("guide") || tally.contains("tips") {
        types.push("Guide/How-to");
    }
    if types.is_empty() {
        types.push("General Video Content");
    }
    types
}

/// How detailed a channel's content is, judged by mean summary length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDepth {
    Detailed,
    Moderate,
    Concise,
}

impl ContentDepth {
    pub fn from_mean(mean_chars: f64) -> Self {
        if mean_chars > 1000.0 {
            ContentDepth::Detailed
        } else if mean_chars > 500.0 {
            ContentDepth::Moderate
        } else {
            ContentDepth::Concise
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ContentDepth::Detailed => {
                "Content appears to be detailed and comprehensive, suggesting educational or in-depth content."
            }
            ContentDepth::Moderate => {
                "Content is moderately detailed, suggesting informative videos with practical information."
            }
            ContentDepth::Concise => {
                "Content is concise, suggesting short-form or entertainment-focused videos."
            }
        }
    }
}

/// Accumulates theme signals over many transcripts.
#[derive(Debug, Clone, Default)]
pub struct ThemeScanner {
    tally: KeywordTally,
    topics: Vec<String>,
}

impl ThemeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one video's full transcript.
    pub fn scan(&mut self, transcript: &str) {
        self.tally.record(transcript);

        for sentence in segment(transcript) {
            if self.topics.len() >= MAX_TOPICS {
                break;
            }
            let len = char_len(&sentence);
            if len > 30 && len < 150 {
                self.topics.push(sentence);
            }
        }
    }

    pub fn tally(&self) -> &KeywordTally {
        &self.tally
    }

    /// Candidate topic sentences collected so far (at most 50).
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Render the content-nature section of a channel report.
    ///
    /// `summary_lengths` are the character lengths of the per-video summaries.
    pub fn report(&self, summary_lengths: &[usize]) -> String {
        let mut analysis = String::from("Content Nature Analysis:\n\n");

        analysis.push_str("Most Common Themes:\n");
        for (marker, count) in self.tally.ranked() {
            let _ = writeln!(analysis, "- {} (appears {} times)", marker, count);
        }
        analysis.push('\n');

        let _ = writeln!(analysis, "Content Type: {}\n", content_types(&self.tally).join(", "));

        let mean = if summary_lengths.is_empty() {
            0.0
        } else {
            summary_lengths.iter().sum::<usize>() as f64 / summary_lengths.len() as f64
        };

        analysis.push_str("Overall Nature:\n");
        let _ = writeln!(analysis, "{}", ContentDepth::from_mean(mean).description());
        let _ = writeln!(
            analysis,
            "Average content depth: {} characters per summary.",
            mean.round() as u64
        );

        analysis
    }
}
