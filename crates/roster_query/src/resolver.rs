//! Resolution of user-typed names to one canonical candidate.
//!
//! Rules, first success wins:
//!
//! 1. Quoted text must equal exactly one candidate, ignoring case.
//! 2. Otherwise the normalized text is tried as a prefix of every normalized
//!    candidate. Several prefix matches are ambiguous right away.
//! 3. Otherwise every word of the text must occur in the candidate.

use roster_foundation::{Error, Result, fuzzy_matches, normalize_name};
use tracing::{debug, warn};

/// Outcome of resolving one name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Exactly one candidate matched.
    Unique(&'a str),
    /// Several candidates matched, in candidate order.
    Ambiguous(Vec<&'a str>),
    /// Nothing matched.
    NotFound,
}

impl<'a> Resolution<'a> {
    /// Converts the outcome into a result, reporting `query` on failure.
    ///
    /// # Errors
    ///
    /// Returns `NoMatch` or `Ambiguous` errors.
    pub fn into_result(self, query: &str) -> Result<&'a str> {
        match self {
            Self::Unique(name) => Ok(name),
            Self::Ambiguous(names) => Err(Error::ambiguous(
                query,
                names.into_iter().map(str::to_string).collect(),
            )),
            Self::NotFound => Err(Error::no_match(query)),
        }
    }

    /// Returns the unique name, if any.
    #[must_use]
    pub fn unique(&self) -> Option<&'a str> {
        match self {
            Self::Unique(name) => Some(*name),
            _ => None,
        }
    }
}

/// Stateless name resolver.
pub struct NameResolver;

impl NameResolver {
    /// Resolves `query` against `candidates`.
    #[must_use]
    pub fn resolve<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Resolution<'a> {
        let query = query.trim();
        if query.is_empty() {
            return Resolution::NotFound;
        }

        let resolution = if let Some(exact) = strip_quotes(query) {
            Self::resolve_exact(exact, candidates)
        } else {
            Self::resolve_prefix(query, candidates)
                .unwrap_or_else(|| Self::resolve_all_words(query, candidates))
        };

        match &resolution {
            Resolution::Ambiguous(names) => {
                warn!(query, matches = names.len(), "ambiguous name");
            }
            other => debug!(query, resolution = ?other, "resolved name"),
        }
        resolution
    }

    /// Resolves `query` and converts the outcome into a result.
    ///
    /// # Errors
    ///
    /// Returns `NoMatch` or `Ambiguous` errors.
    pub fn resolve_name<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Result<&'a str> {
        Self::resolve(query, candidates).into_result(query.trim())
    }

    fn resolve_exact<'a, S: AsRef<str>>(text: &str, candidates: &'a [S]) -> Resolution<'a> {
        let lowered = text.to_lowercase();
        let mut matches = candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| c.to_lowercase() == lowered);
        match (matches.next(), matches.next()) {
            (Some(name), None) => Resolution::Unique(name),
            _ => Resolution::NotFound,
        }
    }

    fn resolve_prefix<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Option<Resolution<'a>> {
        let prefix = normalize_name(query);
        let matches: Vec<&str> = candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| normalize_name(c).starts_with(&prefix))
            .collect();
        match matches.len() {
            0 => None,
            1 => Some(Resolution::Unique(matches[0])),
            _ => Some(Resolution::Ambiguous(matches)),
        }
    }

    fn resolve_all_words<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Resolution<'a> {
        let matches: Vec<&str> = candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| fuzzy_matches(c, query))
            .collect();
        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(matches[0]),
            _ => Resolution::Ambiguous(matches),
        }
    }
}

fn strip_quotes(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}
