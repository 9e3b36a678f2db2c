//! Free-text search terms.
//!
//! A search term typed by a user is either quoted (an exact match is wanted)
//! or bare (a fuzzy, all-words match is wanted). The distinction is made once,
//! when the term is parsed, and carried as a [`MatchMode`] from then on.

use std::fmt;

/// How a free-text search term should be compared against catalog text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// The term was quoted.
    Exact,
    /// The term was bare.
    Fuzzy,
}

/// A parsed free-text search term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextPattern {
    /// The term as typed, without surrounding quotes.
    text: String,
    /// Lowercased copy of `text`, used for comparisons.
    lowered: String,
    mode: MatchMode,
}

impl TextPattern {
    /// Parses a raw argument, detecting surrounding double quotes.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let quoted = trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"');
        if quoted {
            Self::exact(&trimmed[1..trimmed.len() - 1])
        } else {
            Self::fuzzy(trimmed)
        }
    }

    /// Creates an exact-match term.
    #[must_use]
    pub fn exact(text: impl Into<String>) -> Self {
        Self::with_mode(text.into(), MatchMode::Exact)
    }

    /// Creates a fuzzy all-words term.
    #[must_use]
    pub fn fuzzy(text: impl Into<String>) -> Self {
        Self::with_mode(text.into(), MatchMode::Fuzzy)
    }

    fn with_mode(text: String, mode: MatchMode) -> Self {
        let lowered = text.to_lowercase();
        Self {
            text,
            lowered,
            mode,
        }
    }

    /// Returns the term without quotes.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the match mode.
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns true if the term has no searchable text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Tests a long free-text field such as a skill name or description.
    ///
    /// Exact terms match anywhere in the field; fuzzy terms need every word.
    #[must_use]
    pub fn matches_text(&self, field: &str) -> bool {
        match self.mode {
            MatchMode::Exact => field.to_lowercase().contains(&self.lowered),
            MatchMode::Fuzzy => fuzzy_matches(field, &self.lowered),
        }
    }

    /// Tests an identifier-like field such as a job name.
    ///
    /// Exact terms need whole-field equality, ignoring case.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        match self.mode {
            MatchMode::Exact => name.to_lowercase() == self.lowered,
            MatchMode::Fuzzy => fuzzy_matches(name, &self.lowered),
        }
    }
}

impl fmt::Display for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            MatchMode::Exact => write!(f, "\"{}\"", self.text),
            MatchMode::Fuzzy => f.write_str(&self.text),
        }
    }
}

/// All-words match.
///
/// Splits `search` on whitespace, keeping punctuation, and requires every
/// word to occur somewhere in `candidate`, ignoring case.
#[must_use]
pub fn fuzzy_matches(candidate: &str, search: &str) -> bool {
    let candidate = candidate.to_lowercase();
    search
        .split_whitespace()
        .all(|word| candidate.contains(&word.to_lowercase()))
}

/// Normalizes a name for prefix comparison: trimmed, lowercased, spaces
/// replaced with hyphens.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}
