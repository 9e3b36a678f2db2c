//! The main REPL implementation.
//!
//! Search commands span several lines: the first line holds the command and
//! its search type, each following line one refinement, and a blank line
//! ends the command. Resonance lookups and meta commands are single lines.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use roster_foundation::{Error, ErrorContext, ErrorKind, Result};
use roster_query::{CommandWord, Vocabulary};

use crate::editor::{LineEditor, ReadResult, RustylineEditor, completion_words};
use crate::session::Session;

/// Outcome of one REPL input.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    /// Keep reading.
    Continue,
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (catalog, query service).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for refinement lines).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL over `session` with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let vocabulary = session.service().parser().vocabulary().clone();
        let editor = RustylineEditor::new(&vocabulary)?;
        Ok(Self::with_editor(editor).with_session(session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and the sample catalog.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "roster> ".to_string(),
            continuation_prompt: "   ...> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        let words = completion_words(session.service().parser().vocabulary());
        self.editor.set_keywords(words);
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(Action::Continue) => {}
                Ok(Action::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    fn read_eval_print(&mut self) -> Result<Action> {
        let Some(input) = self.read_input()? else {
            return Ok(Action::Quit);
        };

        if input.trim().is_empty() {
            return Ok(Action::Continue);
        }

        for line in input.lines() {
            self.editor.add_history(line);
        }

        if input.trim_start().starts_with(':') {
            return self.meta_command(input.trim());
        }

        println!("{}", self.eval(&input));
        Ok(Action::Continue)
    }

    /// Reads one command, following refinement lines until a blank line.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(Some(String::new()));
            }
            ReadResult::Eof => return Ok(None),
        };

        if !self.takes_refinements(&input) {
            return Ok(Some(input));
        }

        loop {
            match self.editor.read_continuation(&self.continuation_prompt)? {
                ReadResult::Line(line) => {
                    if line.trim().is_empty() {
                        return Ok(Some(input));
                    }
                    input.push('\n');
                    input.push_str(&line);
                }
                ReadResult::Interrupted => {
                    println!("\nInput cancelled.");
                    return Ok(Some(String::new()));
                }
                // Ctrl+D ends the command like a blank line would
                ReadResult::Eof => return Ok(Some(input)),
            }
        }
    }

    /// Returns true if `first_line` starts a command that may be refined.
    fn takes_refinements(&self, first_line: &str) -> bool {
        let token = first_line.split_whitespace().next().unwrap_or_default();
        matches!(
            self.vocabulary().command(token),
            Some(CommandWord::UnitSearch | CommandWord::SkillsByName | CommandWord::SkillsByDescription)
        )
    }

    fn vocabulary(&self) -> &Vocabulary {
        self.session.service().parser().vocabulary()
    }

    /// Evaluates one command, returning the text to show.
    #[must_use]
    pub fn eval(&self, input: &str) -> String {
        self.session.respond(input)
    }

    /// Evaluates every command in a file.
    ///
    /// Commands are separated by blank lines; lines starting with `#` are
    /// comments. Returns each command's output in order. A failing command's
    /// message names the file and the file line it failed on.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn eval_file(&self, path: &Path) -> Result<Vec<String>> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;
        let source_name = path.display().to_string();
        Ok(split_commands(&source)
            .into_iter()
            .map(|(start, command)| {
                self.session.execute(&command).unwrap_or_else(|err| {
                    let line = file_line(&err, start);
                    let err = err.with_context(
                        ErrorContext::new()
                            .with_source(source_name.as_str())
                            .with_line(line),
                    );
                    self.session.service().render_error(&err)
                })
            })
            .collect())
    }

    fn meta_command(&mut self, line: &str) -> Result<Action> {
        let (word, argument) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match word {
            ":quit" | ":q" => return Ok(Action::Quit),
            ":help" => print_help(),
            ":reload" => {
                let generation = self.session.reload()?;
                println!("Reloaded catalog (generation {generation}).");
            }
            ":load" => {
                let path = argument.trim();
                if path.is_empty() {
                    return Err(Error::new(ErrorKind::Internal(
                        ":load requires a path".to_string(),
                    )));
                }
                let generation = self.session_mut().load_file(Path::new(path))?;
                println!(
                    "Loaded {} units from {path} (generation {generation}).",
                    self.session.catalog().len()
                );
            }
            other => {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "unknown REPL command `{other}` (try :help)"
                ))));
            }
        }
        Ok(Action::Continue)
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mRoster\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "{} units loaded. End a search with a blank line; :help for help, Ctrl+D to exit.\n",
            self.session.catalog().len()
        );

        let _ = io::stdout().flush();
    }
}

/// Splits command-file text into commands at blank lines, dropping `#`
/// comment lines.
/// Splits a command file into commands, each paired with the 1-based file
/// line it starts on.
fn split_commands(source: &str) -> Vec<(usize, String)> {
    let mut commands = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut start = 0;
    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if trimmed.is_empty() {
            if !current.is_empty() {
                commands.push((start, current.join("\n")));
                current.clear();
            }
        } else {
            if current.is_empty() {
                start = index + 1;
            }
            current.push(line);
        }
    }
    if !current.is_empty() {
        commands.push((start, current.join("\n")));
    }
    commands
}

/// Maps an error from a command starting at file line `start` to a file line.
///
/// Parse errors count lines within the command; comment lines inside a
/// command are not counted.
fn file_line(err: &Error, start: usize) -> usize {
    match err.kind {
        ErrorKind::ParseError { line, .. } => start + line.saturating_sub(1),
        _ => start,
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_help() {
    println!(
        "\x1b[1mSEARCH:\x1b[0m
    !unit-search all | <criterion>     First line; fixes the result type
    [not] <criterion>                  One refinement per line
    <blank line>                       Runs the search

\x1b[1mCRITERIA:\x1b[0m
    rarity <UR|MR|SR|R|N>
    element <earth|wind|fire|water|ice|lightning|dark|light|none>
    skill-name <text>      skill-desc <text>      job <text>
    Quote text for an exact match: skill-name \"Cover\"

\x1b[1mOTHER COMMANDS:\x1b[0m
    !skills-by-name <text>     !skills-by-desc <text>
    !res <unit>/<esper>

\x1b[1mREPL COMMANDS:\x1b[0m
    :load <path>     Load a catalog snapshot (.json or MessagePack)
    :reload          Reload the last snapshot file
    :help            Show this help
    :quit            Exit (or Ctrl+D)"
    );
}
