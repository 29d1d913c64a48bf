//! Intent detection via an explicit keyword rule table
//!
//! Keyword heuristics — deterministic, no ML model. The table maps keyword
//! sets to intents so the mapping stays independently testable and can be
//! swapped for a smarter classifier without touching the turn pipeline.

/// What the user is asking for this turn
///
/// A turn may carry several intents at once; clothing and driving are not
/// mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// "what should I wear / how should I dress"
    Clothing,
    /// "is it safe to drive / road conditions"
    Driving,
    /// "why" follow-up on a prior advisory
    Explanation,
    /// End the conversation
    Exit,
    /// Anything else
    General,
}

/// Keyword sets, matched as case-insensitive substrings
const CLOTHING_KEYWORDS: &[&str] = &["wear", "dress"];
const DRIVING_KEYWORDS: &[&str] = &["drive", "safety", "conditions"];
const EXPLANATION_KEYWORDS: &[&str] = &["why"];

/// Exit keywords, matched only against the whole trimmed input
const EXIT_KEYWORDS: &[&str] = &["exit", "quit", "bye"];

/// Classify user text into the set of intents it carries
///
/// An input that exactly equals an exit keyword yields `[Exit]` alone; exit
/// takes precedence over everything else for that turn. Otherwise all
/// matching keyword sets are unioned, and an input matching none of them is
/// `[General]`.
#[must_use]
pub fn classify(text: &str) -> Vec<Intent> {
    let lowered = text.trim().to_lowercase();

    if EXIT_KEYWORDS.contains(&lowered.as_str()) {
        return vec![Intent::Exit];
    }

    let mut intents = Vec::new();
    if contains_any(&lowered, CLOTHING_KEYWORDS) {
        intents.push(Intent::Clothing);
    }
    if contains_any(&lowered, DRIVING_KEYWORDS) {
        intents.push(Intent::Driving);
    }
    if contains_any(&lowered, EXPLANATION_KEYWORDS) {
        intents.push(Intent::Explanation);
    }

    if intents.is_empty() {
        intents.push(Intent::General);
    }
    intents
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
