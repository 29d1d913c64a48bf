//! Location Resolution Module
//!
//! Extracts the first geopolitical place mention from free user text. The
//! concrete extraction mechanism hides behind the [`LocationResolver`] trait
//! so a model-backed extractor can replace the rule-based default without
//! touching the turn pipeline.

use crate::models::Location;
use tracing::debug;

/// Capability of turning free text into a place mention
///
/// Pure function of the input text; no side effects. Implementations must
/// return the first recognized place, already normalized.
pub trait LocationResolver: Send + Sync {
    fn resolve(&self, text: &str) -> Option<Location>;
}

/// Rule-based resolver: locative-preposition patterns with a
/// capitalized-token fallback
///
/// Heuristic by design. "what's the weather in new york today" resolves via
/// the "in <place>" pattern; "Is Paris safe to drive?" via the capitalized
/// scan. Words that never name a place (weather nouns, pronouns, question
/// words) are filtered out in both passes.
pub struct RuleBasedResolver;

/// Words that introduce a place mention
const PREPOSITIONS: &[&str] = &["in", "for", "at", "near"];

/// Words that end a place mention started by a preposition
const STOP_WORDS: &[&str] = &[
    "today", "tomorrow", "tonight", "this", "that", "next", "right", "now", "please", "and", "or",
    "if", "when", "so", "then",
];

const ARTICLES: &[&str] = &["the", "a", "an"];

/// Words that never name a place on their own
const NON_PLACES: &[&str] = &[
    "i", "it", "me", "my", "you", "your", "we", "us", "he", "she", "they", "them", "weather",
    "rain", "snow", "sun", "wind", "storm", "fog", "cold", "heat", "morning", "afternoon",
    "evening", "night", "weekend", "week", "coat", "jacket", "umbrella", "boots", "sweater",
    "clothes", "home", "work", "school", "town", "city", "outside", "there", "here", "what",
    "whats", "what's", "how", "is", "are", "was", "will", "should", "would", "can", "could", "do",
    "does", "tell", "know", "about", "conditions", "driving", "safe", "safety", "drive", "wear",
    "dress", "why", "today", "tomorrow", "tonight", "now", "this", "that", "next", "please",
    "good", "bad", "case", "general", "hello", "hi", "thanks", "thank",
];

/// Longest place mention collected after a preposition, in words
const MAX_PLACE_WORDS: usize = 3;

impl LocationResolver for RuleBasedResolver {
    fn resolve(&self, text: &str) -> Option<Location> {
        let tokens: Vec<&str> = text
            .split_whitespace()
            .map(clean_token)
            .filter(|t| !t.is_empty())
            .collect();

        let resolved = Self::preposition_pass(&tokens).or_else(|| Self::capitalized_pass(&tokens));

        match &resolved {
            Some(location) => debug!("Resolved location '{}' from input", location),
            None => debug!("No location mention found in input"),
        }
        resolved
    }
}

impl RuleBasedResolver {
    /// Scan for "in/for/at/near <place>" patterns
    fn preposition_pass(tokens: &[&str]) -> Option<Location> {
        let mut idx = 0;
        while idx < tokens.len() {
            if !PREPOSITIONS.contains(&tokens[idx].to_lowercase().as_str()) {
                idx += 1;
                continue;
            }

            let mut candidate: Vec<&str> = Vec::new();
            let mut cursor = idx + 1;
            while cursor < tokens.len() && candidate.len() < MAX_PLACE_WORDS {
                let lowered = tokens[cursor].to_lowercase();
                if STOP_WORDS.contains(&lowered.as_str())
                    || PREPOSITIONS.contains(&lowered.as_str())
                {
                    break;
                }
                if candidate.is_empty() && ARTICLES.contains(&lowered.as_str()) {
                    cursor += 1;
                    continue;
                }
                candidate.push(tokens[cursor]);
                cursor += 1;
            }

            if let Some(first) = candidate.first() {
                if !NON_PLACES.contains(&first.to_lowercase().as_str()) {
                    return Some(Location::new(&candidate.join(" ")));
                }
            }
            // Rejected candidate; keep scanning for a later preposition
            idx = cursor.max(idx + 1);
        }
        None
    }

    /// Fall back to the first run of capitalized tokens that could be a place
    fn capitalized_pass(tokens: &[&str]) -> Option<Location> {
        let mut idx = 0;
        while idx < tokens.len() {
            if Self::is_place_candidate(tokens[idx]) {
                let mut run = vec![tokens[idx]];
                let mut cursor = idx + 1;
                while cursor < tokens.len()
                    && run.len() < MAX_PLACE_WORDS
                    && Self::is_place_candidate(tokens[cursor])
                {
                    run.push(tokens[cursor]);
                    cursor += 1;
                }
                return Some(Location::new(&run.join(" ")));
            }
            idx += 1;
        }
        None
    }

    fn is_place_candidate(token: &str) -> bool {
        let starts_upper = token.chars().next().is_some_and(char::is_uppercase);
        let lowered = token.to_lowercase();
        starts_upper
            && !NON_PLACES.contains(&lowered.as_str())
            && !PREPOSITIONS.contains(&lowered.as_str())
            && !STOP_WORDS.contains(&lowered.as_str())
            && !ARTICLES.contains(&lowered.as_str())
    }
}

/// Strip surrounding punctuation from a whitespace-separated token
fn clean_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Option<String> {
        RuleBasedResolver
            .resolve(text)
            .map(|loc| loc.name().to_string())
    }

    #[test]
    fn test_resolves_in_pattern() {
        assert_eq!(resolve("What's the weather in Paris?"), Some("Paris".into()));
        assert_eq!(resolve("weather in lagos"), Some("Lagos".into()));
    }

    #[test]
    fn test_resolves_multi_word_place() {
        assert_eq!(
            resolve("Is it safe to drive in New York today?"),
            Some("New York".into())
        );
    }

    #[test]
    fn test_skips_articles_after_preposition() {
        assert_eq!(resolve("weather in the Netherlands"), Some("Netherlands".into()));
    }

    #[test]
    fn test_rejects_non_place_after_preposition() {
        assert_eq!(resolve("What should I wear in the rain?"), None);
        assert_eq!(resolve("what should I dress for tomorrow?"), None);
    }

    #[test]
    fn test_later_preposition_wins_over_rejected_candidate() {
        assert_eq!(
            resolve("what should I wear in the rain in Paris?"),
            Some("Paris".into())
        );
    }

    #[test]
    fn test_capitalized_fallback() {
        assert_eq!(resolve("Is Paris safe to drive?"), Some("Paris".into()));
        assert_eq!(resolve("Tell me about London"), Some("London".into()));
    }

    #[test]
    fn test_no_location_in_followups() {
        assert_eq!(resolve("Should I wear a coat?"), None);
        assert_eq!(resolve("weather"), None);
        assert_eq!(resolve("bye"), None);
        assert_eq!(resolve("why?"), None);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        assert_eq!(resolve("weather in Oslo!"), Some("Oslo".into()));
        assert_eq!(resolve("conditions in Berlin, please"), Some("Berlin".into()));
    }

    #[test]
    fn test_resolution_is_pure() {
        let first = resolve("weather in Madrid");
        let second = resolve("weather in Madrid");
        assert_eq!(first, second);
    }
}
