//! Line grammar for search commands.
//!
//! ```text
//! command    := search | legacy | resonance
//! search     := "!unit-search" ( "all" | criterion ) NL refinement*
//! legacy     := ( "!skills-by-name" | "!skills-by-desc" ) text NL refinement*
//! resonance  := ( "!res" | "!resonance" ) text "/" text
//! refinement := [ "not" ] criterion
//! criterion  := keyword argument
//! ```
//!
//! Blank lines are skipped; keywords, command tokens and enum values ignore
//! case. Every error names the raw 1-based line it was found on.

use roster_foundation::{Element, Error, Rarity, Result, TextPattern};
use tracing::debug;

use crate::clause::{Clause, Command, Criterion, Query};
use crate::resonance::ResonanceTarget;
use crate::tokenizer::{InputLine, InputTokenizer};
use crate::vocabulary::{CommandWord, Keyword, Vocabulary};

/// Parser for search commands.
#[derive(Clone, Debug, Default)]
pub struct QueryParser {
    vocabulary: Vocabulary,
}

impl QueryParser {
    /// Creates a parser with the standard vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser over a custom vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Returns the vocabulary in use.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parses a complete command.
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the offending line.
    pub fn parse(&self, input: &str) -> Result<Command> {
        let lines = InputTokenizer::lines(input);
        let Some((first, rest)) = lines.split_first() else {
            return Err(Error::parse(1, "empty command", ""));
        };

        let (token, argument) = InputTokenizer::split_word(first.text);
        let word = self
            .vocabulary
            .command(token)
            .ok_or_else(|| Error::parse(first.number, format!("unknown command `{token}`"), first.text))?;

        let command = match word {
            CommandWord::UnitSearch => {
                let query = self.parse_head(first, argument)?;
                Command::Search(self.parse_refinements(query, rest)?)
            }
            CommandWord::SkillsByName => {
                let criterion = Self::parse_criterion(Keyword::SkillName, argument, first)?;
                let query = query_from(criterion, first.number);
                Command::SkillSearch(self.parse_refinements(query, rest)?)
            }
            CommandWord::SkillsByDescription => {
                let criterion = Self::parse_criterion(Keyword::SkillDescription, argument, first)?;
                let query = query_from(criterion, first.number);
                Command::SkillSearch(self.parse_refinements(query, rest)?)
            }
            CommandWord::Resonance => {
                if let Some(extra) = rest.first() {
                    return Err(Error::parse(
                        extra.number,
                        "resonance lookups take a single line",
                        extra.text,
                    ));
                }
                Command::Resonance(ResonanceTarget::parse(argument, first.number, first.text)?)
            }
        };

        debug!(?command, "parsed command");
        Ok(command)
    }

    /// Parses a command given as separate lines.
    ///
    /// # Errors
    ///
    /// Same as [`QueryParser::parse`].
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<Command> {
        let joined: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
        self.parse(&joined.join("\n"))
    }

    /// Parses a command that must be a search.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the input is malformed or is not a search.
    pub fn parse_search(&self, input: &str) -> Result<Query> {
        match self.parse(input)? {
            Command::Search(query) | Command::SkillSearch(query) => Ok(query),
            Command::Resonance(_) => Err(Error::parse(
                1,
                "expected a search command",
                input.lines().next().unwrap_or_default().trim(),
            )),
        }
    }

    // =========================================================================
    // Line 1
    // =========================================================================

    fn parse_head(&self, line: &InputLine<'_>, expr: &str) -> Result<Query> {
        let (word, argument) = InputTokenizer::split_word(expr);
        if word.is_empty() {
            return Err(Error::parse(
                line.number,
                "missing search type (expected `all` or a criterion)",
                line.text,
            ));
        }

        match self.vocabulary.keyword(word) {
            Some(Keyword::All) if argument.is_empty() => Ok(Query::all()),
            Some(Keyword::All) => Err(Error::parse(
                line.number,
                "`all` takes no argument",
                line.text,
            )),
            Some(Keyword::Not) => Err(Error::parse(
                line.number,
                "the first line cannot be negated",
                line.text,
            )),
            Some(keyword) => {
                let criterion = Self::parse_criterion(keyword, argument, line)?;
                Ok(query_from(criterion, line.number))
            }
            None => Err(unknown_criterion(word, line)),
        }
    }

    // =========================================================================
    // Refinement lines
    // =========================================================================

    fn parse_refinements(&self, mut query: Query, lines: &[InputLine<'_>]) -> Result<Query> {
        for line in lines {
            query.clauses.push(self.parse_refinement(line)?);
        }
        Ok(query)
    }

    fn parse_refinement(&self, line: &InputLine<'_>) -> Result<Clause> {
        let (mut word, mut argument) = InputTokenizer::split_word(line.text);
        let mut keyword = self.vocabulary.keyword(word);

        let negated = keyword == Some(Keyword::Not);
        if negated {
            (word, argument) = InputTokenizer::split_word(argument);
            if word.is_empty() {
                return Err(Error::parse(
                    line.number,
                    "missing criterion after `not`",
                    line.text,
                ));
            }
            keyword = self.vocabulary.keyword(word);
        }

        match keyword {
            Some(Keyword::Not) => Err(Error::parse(
                line.number,
                "`not` may only appear once per line",
                line.text,
            )),
            Some(Keyword::All) => Err(Error::parse(
                line.number,
                "`all` is only allowed on the first line",
                line.text,
            )),
            Some(keyword) => {
                let criterion = Self::parse_criterion(keyword, argument, line)?;
                Ok(Clause {
                    negated,
                    criterion,
                    line: line.number,
                })
            }
            None => Err(unknown_criterion(word, line)),
        }
    }

    // =========================================================================
    // Criteria
    // =========================================================================

    fn parse_criterion(keyword: Keyword, argument: &str, line: &InputLine<'_>) -> Result<Criterion> {
        let missing = || {
            Error::parse(
                line.number,
                format!("missing argument for `{}`", keyword.canonical()),
                line.text,
            )
        };
        if argument.is_empty() {
            return Err(missing());
        }

        let text = |argument: &str| {
            let pattern = TextPattern::parse(argument);
            if pattern.is_empty() {
                Err(missing())
            } else {
                Ok(pattern)
            }
        };

        match keyword {
            Keyword::Rarity => argument
                .parse::<Rarity>()
                .map(Criterion::Rarity)
                .map_err(|message| Error::parse(line.number, message, line.text)),
            Keyword::Element => argument
                .parse::<Element>()
                .map(Criterion::Element)
                .map_err(|message| Error::parse(line.number, message, line.text)),
            Keyword::SkillName => text(argument).map(Criterion::SkillName),
            Keyword::SkillDescription => text(argument).map(Criterion::SkillDescription),
            Keyword::Job => text(argument).map(Criterion::Job),
            Keyword::All | Keyword::Not => Err(Error::parse(
                line.number,
                format!("`{}` is not a criterion", keyword.canonical()),
                line.text,
            )),
        }
    }
}

fn query_from(criterion: Criterion, line: usize) -> Query {
    let mut query = Query::starting_with(criterion);
    if let Some(first) = query.clauses.first_mut() {
        first.line = line;
    }
    query
}

fn unknown_criterion(word: &str, line: &InputLine<'_>) -> Error {
    Error::parse(line.number, format!("unknown criterion `{word}`"), line.text)
}
