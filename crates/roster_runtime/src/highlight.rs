//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use roster_query::{Keyword, Vocabulary};

const RESET: &str = "\x1b[0m";
const COMMAND: &str = "\x1b[1;36m"; // bold cyan
const NEGATION: &str = "\x1b[31m"; // red
const KEYWORD: &str = "\x1b[36m"; // cyan
const QUOTED: &str = "\x1b[33m"; // yellow
const META: &str = "\x1b[35m"; // magenta

/// Highlighter for search command lines.
///
/// Colours the command token, a leading `not`, the criterion keyword, and
/// quoted arguments. Everything else is left alone.
pub struct RosterHighlighter {
    vocabulary: Vocabulary,
}

impl RosterHighlighter {
    /// Creates a highlighter for the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut rest = line;
        let mut head = true;

        // Leading words: command token, `not`, keyword.
        while head {
            let trimmed = rest.trim_start();
            result.push_str(&rest[..rest.len() - trimmed.len()]);
            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            let word = &trimmed[..end];
            let colour = self.word_colour(word);
            match colour {
                Some(colour) => {
                    result.push_str(colour);
                    result.push_str(word);
                    result.push_str(RESET);
                    rest = &trimmed[end..];
                    head = colour == COMMAND || colour == NEGATION;
                }
                None => {
                    rest = trimmed;
                    head = false;
                }
            }
        }

        // Argument: quoted text stands out.
        let mut in_quote = false;
        for c in rest.chars() {
            if c == '"' {
                if in_quote {
                    result.push(c);
                    result.push_str(RESET);
                } else {
                    result.push_str(QUOTED);
                    result.push(c);
                }
                in_quote = !in_quote;
            } else {
                result.push(c);
            }
        }
        if in_quote {
            result.push_str(RESET);
        }

        Cow::Owned(result)
    }

    fn word_colour(&self, word: &str) -> Option<&'static str> {
        if word.is_empty() {
            return None;
        }
        if word.starts_with(':') {
            return Some(META);
        }
        if self.vocabulary.command(word).is_some() {
            return Some(COMMAND);
        }
        match self.vocabulary.keyword(word)? {
            Keyword::Not => Some(NEGATION),
            _ => Some(KEYWORD),
        }
    }
}

impl Default for RosterHighlighter {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}
