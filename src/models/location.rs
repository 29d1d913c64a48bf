//! Location model for normalized place names

use serde::{Deserialize, Serialize};

/// A normalized place name, each word capitalized
///
/// Produced by the resolver or carried over from session state. Immutable
/// value; the provider is always queried with the normalized form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    name: String,
}

impl Location {
    /// Create a location from raw text, title-casing each word
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let name = raw
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");
        Self { name }
    }

    /// The normalized place name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
