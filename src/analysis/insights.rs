//! Topic-scoped insight selection.

use super::options::KeyTopic;
use super::text::{char_len, split_clauses};

/// Maximum number of insights per report.
pub const MAX_INSIGHTS: usize = 8;

fn is_candidate(clause: &str) -> bool {
    let len = char_len(clause.trim());
    len > 40 && len < 220
}

/// Pick transcript clauses that mention any keyword of `topic`.
///
/// When nothing matches, the first candidate clause is returned on its own so a
/// report is never empty while usable text exists.
pub fn select_insights(transcript: &str, topic: KeyTopic) -> Vec<String> {
    let candidates: Vec<String> = split_clauses(transcript)
        .into_iter()
        .filter(|c| is_candidate(c))
        .collect();

    let keywords = topic.keywords();
    let matches: Vec<String> = candidates
        .iter()
        .filter(|c| {
            let lower = c.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .take(MAX_INSIGHTS)
        .map(|c| c.trim().to_string())
        .collect();

    if matches.is_empty() {
        return candidates.into_iter().take(1).collect();
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_topic_sentences() {
        let transcript = "Our revenue doubled after we changed the onboarding flow. \
                          The office dog is called Biscuit and loves the sofa. \
                          Churn dropped below two percent in the second quarter.";
        let insights = select_insights(transcript, KeyTopic::RevenueAndScale);
        assert_eq!(
            insights,
            vec![
                "Our revenue doubled after we changed the onboarding flow",
                "Churn dropped below two percent in the second quarter.",
            ]
        );
    }

    #[test]
    fn test_caps_at_eight() {
        let sentence = "We learned a painful lesson about hiring too early";
        let transcript = vec![sentence; 20].join(". ");
        let insights = select_insights(&transcript, KeyTopic::FounderJourney);
        assert_eq!(insights.len(), MAX_INSIGHTS);
    }

    #[test]
    fn test_falls_back_to_first_candidate() {
        let transcript = "The office dog is called Biscuit and loves the sofa. \
                          Weather in the city was unusually warm this spring.";
        let insights = select_insights(transcript, KeyTopic::BusinessModel);
        assert_eq!(insights, vec!["The office dog is called Biscuit and loves the sofa"]);
    }

    #[test]
    fn test_empty_without_candidates() {
        assert!(select_insights("Too short. Also short.", KeyTopic::FounderJourney).is_empty());
        assert!(select_insights("", KeyTopic::FounderJourney).is_empty());
    }

    #[test]
    fn test_boundary_needs_trailing_whitespace() {
        // No whitespace after the periods, so this is one over-long clause.
        let transcript = "a".repeat(30) + "." + &"b".repeat(30) + "." + &"c".repeat(200);
        assert!(select_insights(&transcript, KeyTopic::FounderJourney).is_empty());
    }
}
