//! Extractive summary: opening and closing sentences plus heuristic key points.

use super::text::{char_len, normalize_whitespace, segment};
use std::fmt;

/// Sentences at or below this length are not summary material.
const MIN_SENTENCE_CHARS: usize = 20;

/// Transcripts with this many qualifying sentences or fewer are returned verbatim.
const VERBATIM_SENTENCE_LIMIT: usize = 3;

/// Maximum number of key points in a summary.
pub const MAX_KEY_POINTS: usize = 5;

const KEY_POINT_OPENERS: [&str; 3] = ["we", "they", "this"];
const KEY_POINT_TERMS: [&str; 4] = ["important", "learn", "understand", "key"];

/// A compressed view of a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Short transcripts summarize themselves.
    Verbatim(String),
    Compressed {
        key_points: Vec<String>,
        start: String,
        end: String,
    },
}

impl Summary {
    /// Build a summary from raw transcript text.
    ///
    /// The input may be an arbitrary prefix of a longer transcript.
    pub fn from_transcript(transcript: &str) -> Self {
        let cleaned = normalize_whitespace(transcript);
        let sentences: Vec<String> = segment(&cleaned)
            .into_iter()
            .filter(|s| char_len(s) > MIN_SENTENCE_CHARS)
            .collect();

        if sentences.len() <= VERBATIM_SENTENCE_LIMIT {
            return Summary::Verbatim(cleaned);
        }

        let take = (sentences.len() / 3).max(2);
        let start = sentences[..take].join(". ");
        let end = sentences[sentences.len() - take..].join(". ");

        Summary::Compressed {
            key_points: extract_key_points(&sentences),
            start,
            end,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Verbatim(text) => f.write_str(text),
            Summary::Compressed {
                key_points,
                start,
                end,
            } => {
                if !key_points.is_empty() {
                    writeln!(f, "Key Points:")?;
                    for point in key_points {
                        writeln!(f, "- {}", point)?;
                    }
                    writeln!(f)?;
                }
                write!(f, "Overview: {}... {}", start, end)
            }
        }
    }
}

/// Summarize a transcript into display text.
pub fn summarize(transcript: &str) -> String {
    Summary::from_transcript(transcript).to_string()
}

fn is_key_point(sentence: &str) -> bool {
    let lower = sentence.trim().to_lowercase();
    let len = char_len(&lower);
    if len <= 30 || len >= 150 {
        return false;
    }

    KEY_POINT_OPENERS.iter().any(|w| lower.starts_with(w))
        || KEY_POINT_TERMS.iter().any(|w| lower.contains(w))
}

fn extract_key_points(sentences: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| is_key_point(s))
        .map(|s| s.trim())
        .filter(|s| char_len(s) < 200)
        .take(MAX_KEY_POINTS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_transcript() -> String {
        [
            "Hello and welcome back to the channel everyone",
            "We are going to build a small web server from scratch today",
            "First you need to install the toolchain on your machine",
            "It is important to pin the compiler version for reproducibility",
            "Then we write the request handler and wire up the router",
            "They say the borrow checker is hard but it gets easier",
            "Next comes error handling with proper result propagation",
            "This is the part most tutorials skip over entirely",
            "Finally we deploy the binary to a cheap virtual machine",
            "Thanks for watching and see you in the next video",
        ]
        .join(". ")
    }

    #[test]
    fn test_short_transcript_is_returned_normalized() {
        let input = "  Just a   short clip.\n Nothing much here to say at all. ";
        assert_eq!(summarize(input), "Just a short clip. Nothing much here to say at all.");
    }

    #[test]
    fn test_three_qualifying_sentences_is_verbatim() {
        let input = "This sentence is long enough. So is this one right here. \
                     And a third one for good measure. ok. no.";
        assert_eq!(Summary::from_transcript(input), Summary::Verbatim(normalize_whitespace(input)));
    }

    #[test]
    fn test_overview_blocks() {
        let summary = Summary::from_transcript(&long_transcript());
        match summary {
            Summary::Compressed { start, end, .. } => {
                // 10 sentences -> floor(10 / 3) = 3 per block
                assert_eq!(start.split(". ").count(), 3);
                assert!(start.starts_with("Hello and welcome back"));
                assert!(end.ends_with("see you in the next video"));
                assert!(end.starts_with("This is the part"));
            }
            Summary::Verbatim(_) => panic!("expected compressed summary"),
        }
    }

    #[test]
    fn test_minimum_block_size_is_two() {
        let input = "The first sentence is fairly long. The second sentence is fairly long. \
                     The third sentence is fairly long. The fourth sentence is fairly long.";
        let text = summarize(input);
        assert!(text.contains(
            "Overview: The first sentence is fairly long. The second sentence is fairly long... \
             The third sentence is fairly long. The fourth sentence is fairly long"
        ));
    }

    #[test]
    fn test_key_points_format_and_cap() {
        let text = summarize(&long_transcript());
        assert!(text.starts_with("Key Points:\n- "));
        let bullets: Vec<&str> = text.lines().filter(|l| l.starts_with("- ")).collect();
        assert!(bullets.len() <= MAX_KEY_POINTS);
        assert!(bullets.iter().all(|b| b.chars().count() < 202));
        assert!(bullets[0].contains("We are going to build"));
        assert!(text.contains("\n\nOverview: "));
    }

    #[test]
    fn test_no_key_points_gives_overview_only() {
        let input = "Sunny weather came over the hills today. Birds sang in the old oak tree. \
                     A dog barked somewhere down the road. Evening fell quietly over town.";
        let text = summarize(input);
        assert!(text.starts_with("Overview: "));
        assert!(!text.contains("Key Points"));
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let transcript = long_transcript();
        assert_eq!(summarize(&transcript), summarize(&transcript));
    }
}
