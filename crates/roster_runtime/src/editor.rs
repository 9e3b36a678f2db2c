//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; the production implementation wraps
//! rustyline, and tests substitute a scripted editor.

use std::borrow::Cow;

use roster_foundation::{Error, ErrorKind, Result};
use roster_query::Vocabulary;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::highlight::RosterHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Read a continuation line of a multi-line command.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions for command tokens and keywords.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct RosterHelper {
    #[rustyline(Completer)]
    completer: RosterCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: RosterHighlighter,
}

impl Highlighter for RosterHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for command tokens, criterion keywords, and snapshot paths.
struct RosterCompleter {
    file_completer: FilenameCompleter,
    keywords: Vec<String>,
}

impl RosterCompleter {
    fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            keywords: completion_words(vocabulary),
        }
    }

    /// Candidates for the word ending at `pos`, ignoring case.
    fn keyword_candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = line[start..pos].to_lowercase();

        let candidates = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(&word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for RosterCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // `:load <path>` completes file names
        if line.trim_start().starts_with(":load ") {
            return self.file_completer.complete(line, pos, ctx);
        }
        Ok(self.keyword_candidates(line, pos))
    }
}

/// Every command spelling, keyword spelling, and REPL meta command.
#[must_use]
pub fn completion_words(vocabulary: &Vocabulary) -> Vec<String> {
    let mut words = vocabulary.command_spellings();
    words.extend(vocabulary.keyword_spellings().into_iter().map(String::from));
    words.extend([":help", ":load", ":reload", ":quit"].map(String::from));
    words
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<RosterHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor for the given vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = RosterHelper {
            completer: RosterCompleter::new(vocabulary),
            hinter: HistoryHinter::new(),
            highlighter: RosterHighlighter::new(vocabulary.clone()),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn read_continuation(&mut self, prompt: &str) -> Result<ReadResult> {
        self.read_line(prompt)
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
