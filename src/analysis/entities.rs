//! Founder and business name extraction.

use super::text::normalize_whitespace;
use regex::Regex;

/// Placeholder used when no name could be found.
pub const UNKNOWN: &str = "Unknown";

/// Names pulled out of a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entities {
    pub founder_name: String,
    pub business_name: String,
}

/// Strategy for finding the founder and business behind a video.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, title: &str, channel_title: &str, transcript: &str) -> Entities;
}

// Cue words match case-insensitively; the captured names must be capitalized.
const PERSON_NAME: &str = r"([A-Z][a-z]+(?: [A-Z][a-z]+){0,2})";
const BUSINESS_NAME: &str = r"([A-Z][A-Za-z0-9_'&-]+(?: [A-Z][A-Za-z0-9_'&-]+){0,3})";

const FOUNDER_CUES: [&str; 4] = [r"(?i:my name is) ", r"(?i:i'm) ", r"(?i:i am) ", r"(?i:with) "];
// "at" and "from" are case-sensitive and have no word boundary ("that Acme" matches).
const BUSINESS_CUES: [&str; 4] = [
    r"at ",
    r"from ",
    r"(?i:company (?:called|named)) ",
    r"(?i:founder of) ",
];

/// Ordered-regex extractor: the first matching pattern wins, then fallbacks apply.
pub struct RegexEntityExtractor {
    founder_patterns: Vec<Regex>,
    business_patterns: Vec<Regex>,
}

impl RegexEntityExtractor {
    pub fn new() -> Self {
        let compile = |cue: &str, name: &str| {
            Regex::new(&format!("{}{}", cue, name)).expect("Invalid regex")
        };

        Self {
            founder_patterns: FOUNDER_CUES.iter().map(|c| compile(c, PERSON_NAME)).collect(),
            business_patterns: BUSINESS_CUES.iter().map(|c| compile(c, BUSINESS_NAME)).collect(),
        }
    }

    fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
        patterns
            .iter()
            .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
            .map(|m| normalize_whitespace(m.as_str()))
            .filter(|s| !s.is_empty())
    }
}

impl Default for RegexEntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor for RegexEntityExtractor {
    fn extract(&self, title: &str, channel_title: &str, transcript: &str) -> Entities {
        let founder_name = Self::first_capture(&self.founder_patterns, transcript)
            .or_else(|| Some(normalize_whitespace(channel_title)))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let business_name = Self::first_capture(&self.business_patterns, transcript)
            .or_else(|| title.split('|').nth(1).map(normalize_whitespace))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());

        Entities {
            founder_name,
            business_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(title: &str, channel: &str, transcript: &str) -> Entities {
        RegexEntityExtractor::new().extract(title, channel, transcript)
    }

    #[test]
    fn test_fallbacks_to_channel_and_title() {
        let entities = extract("Foo | Acme", "FooChannel", "nothing to see here");
        assert_eq!(entities.founder_name, "FooChannel");
        assert_eq!(entities.business_name, "Acme");
    }

    #[test]
    fn test_first_pattern_wins() {
        let entities = extract(
            "",
            "",
            "My name is Jane Smith and I am the founder of Acme",
        );
        assert_eq!(entities.founder_name, "Jane Smith");
        assert_eq!(entities.business_name, "Acme");
    }

    #[test]
    fn test_cue_is_case_insensitive_but_name_is_not() {
        let entities = extract("", "", "so i'm Bob Lee and this is it");
        assert_eq!(entities.founder_name, "Bob Lee");

        let entities = extract("", "Channel", "i'm going to show you");
        assert_eq!(entities.founder_name, "Channel");
    }

    #[test]
    fn test_business_patterns_in_order() {
        let entities = extract("", "", "I worked at Big Co Labs before a company called Zeta");
        assert_eq!(entities.business_name, "Big Co Labs");

        let entities = extract("", "", "we run a Company Named Orbit-Works now");
        assert_eq!(entities.business_name, "Orbit-Works");
    }

    #[test]
    fn test_at_matches_inside_words() {
        let entities = extract("", "", "the thing that Acme does well");
        assert_eq!(entities.business_name, "Acme");
    }

    #[test]
    fn test_unknown_when_nothing_found() {
        let entities = extract("No pipes here", "   ", "");
        assert_eq!(entities.founder_name, UNKNOWN);
        assert_eq!(entities.business_name, UNKNOWN);

        let entities = extract("Title |   ", "", "");
        assert_eq!(entities.business_name, UNKNOWN);
    }

    #[test]
    fn test_names_are_whitespace_normalized() {
        let entities = extract("A |   Big   Shop  | c", "  The   Founder ", "");
        assert_eq!(entities.founder_name, "The Founder");
        assert_eq!(entities.business_name, "Big Shop");
    }
}
