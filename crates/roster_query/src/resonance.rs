//! `unit/esper` resonance lookup targets.
//!
//! Only the parsing and name resolution live here; resonance values are kept
//! by an external store.

use std::fmt;

use roster_foundation::{Error, Result};

use crate::resolver::NameResolver;

/// The two free-text halves of a `!res unit/esper` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResonanceTarget {
    unit: String,
    esper: String,
}

impl ResonanceTarget {
    /// Parses `unit/esper` text from input line `line`.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the `/` is missing or either half is blank.
    pub fn parse(argument: &str, line: usize, source_line: &str) -> Result<Self> {
        let Some((unit, esper)) = argument.split_once('/') else {
            return Err(Error::parse(line, "expected `<unit>/<esper>`", source_line));
        };
        let (unit, esper) = (unit.trim(), esper.trim());
        if unit.is_empty() || esper.is_empty() {
            return Err(Error::parse(
                line,
                "both halves of `<unit>/<esper>` are required",
                source_line,
            ));
        }
        Ok(Self {
            unit: unit.to_string(),
            esper: esper.to_string(),
        })
    }

    /// The unit half as typed.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The esper half as typed.
    #[must_use]
    pub fn esper(&self) -> &str {
        &self.esper
    }

    /// Resolves both halves against canonical names.
    ///
    /// An empty esper list leaves the esper half as typed.
    ///
    /// # Errors
    ///
    /// Returns the first `NoMatch` or `Ambiguous` error.
    pub fn resolve<'a, S: AsRef<str>, T: AsRef<str>>(
        &'a self,
        units: &'a [S],
        espers: &'a [T],
    ) -> Result<ResolvedResonance<'a>> {
        let unit = NameResolver::resolve_name(&self.unit, units)?;
        let esper = if espers.is_empty() {
            self.esper.as_str()
        } else {
            NameResolver::resolve_name(&self.esper, espers)?
        };
        Ok(ResolvedResonance { unit, esper })
    }
}

impl fmt::Display for ResonanceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.unit, self.esper)
    }
}

/// A resonance target with both halves resolved to canonical names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedResonance<'a> {
    /// Canonical unit name.
    pub unit: &'a str,
    /// Canonical esper name, or the typed half when no espers are known.
    pub esper: &'a str,
}

impl fmt::Display for ResolvedResonance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.unit, self.esper)
    }
}
