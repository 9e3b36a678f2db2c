//! Error types for the Roster system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Default number of candidate names listed in an ambiguity message.
pub const MAX_LISTED_CANDIDATES: usize = 5;

/// Result alias used across the Roster crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Roster operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error for a 1-based input line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>, source_line: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseError {
            line,
            message: message.into(),
            source_line: source_line.into(),
        })
    }

    /// Creates a no-match error for a free-text reference.
    #[must_use]
    pub fn no_match(query: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoMatch {
            query: query.into(),
        })
    }

    /// Creates an ambiguity error listing every candidate that matched.
    #[must_use]
    pub fn ambiguous(query: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::new(ErrorKind::Ambiguous {
            query: query.into(),
            candidates,
        })
    }

    /// Creates a duplicate unit name error.
    #[must_use]
    pub fn duplicate_unit(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateUnit(name.into()))
    }

    /// Returns true if the error describes a problem with what the user typed.
    ///
    /// These errors are safe to show verbatim; the caller is expected to
    /// report them and carry on.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ParseError { .. } | ErrorKind::NoMatch { .. } | ErrorKind::Ambiguous { .. }
        )
    }

    /// Renders the message shown to an end user.
    ///
    /// Identical to `Display` except that ambiguity errors list at most
    /// `max_candidates` names, and a source location is appended when the
    /// error carries one.
    #[must_use]
    pub fn user_message(&self, max_candidates: usize) -> String {
        let message = match &self.kind {
            ErrorKind::Ambiguous { query, candidates } => {
                ambiguity_message(query, candidates, max_candidates)
            }
            kind => kind.to_string(),
        };
        match &self.context {
            Some(context) if context.source.is_some() => format!("{message} ({context})"),
            _ => message,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed query text.
    #[error("parse error on line {line}: {message}")]
    ParseError {
        /// Line number (1-indexed) of the offending input line.
        line: usize,
        /// Description of the parse error.
        message: String,
        /// The raw input line where the error occurred.
        source_line: String,
    },

    /// A free-text reference resolved to zero candidates.
    #[error("no match for `{query}`")]
    NoMatch {
        /// The text as the user typed it.
        query: String,
    },

    /// A free-text reference resolved to more than one candidate.
    #[error("{}", ambiguity_message(.query, .candidates, MAX_LISTED_CANDIDATES))]
    Ambiguous {
        /// The text as the user typed it.
        query: String,
        /// Every candidate name that matched, in candidate order.
        candidates: Vec<String>,
    },

    /// Two units share a name (case-insensitive).
    #[error("duplicate unit name: {0}")]
    DuplicateUnit(String),

    /// A skill entry was declared with a learn level of zero.
    #[error("invalid learn level {level} for skill {skill}")]
    InvalidLevel {
        /// The skill name.
        skill: String,
        /// The offending level.
        level: u32,
    },

    /// Catalog snapshot could not be encoded or decoded.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File system failure while loading or saving a snapshot.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn ambiguity_message(query: &str, candidates: &[String], max: usize) -> String {
    let shown = candidates.len().min(max);
    format!(
        "multiple matches for `{query}`. Please make your text more specific and try again. \
         For an exact match, enclose your text in double quotes. \
         Possible matches (max {max}) are {}",
        candidates[..shown].join(", ")
    )
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or command name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
