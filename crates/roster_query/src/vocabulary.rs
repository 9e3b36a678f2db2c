//! Vocabulary registry for command tokens and criterion keywords.
//!
//! Every keyword has a canonical spelling and any number of synonyms
//! (`job` / `job-name`, `skill-desc` / `skill-description`, ...). Lookups
//! ignore case.

use std::collections::HashMap;

/// A word with grammatical meaning inside a search line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `rarity <code>`
    Rarity,
    /// `element <name>`
    Element,
    /// `skill-name <text>`
    SkillName,
    /// `skill-desc <text>`
    SkillDescription,
    /// `job <text>`
    Job,
    /// `all`, line 1 only
    All,
    /// `not`, negates the rest of the line
    Not,
}

impl Keyword {
    /// Canonical spelling.
    #[must_use]
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::Rarity => "rarity",
            Self::Element => "element",
            Self::SkillName => "skill-name",
            Self::SkillDescription => "skill-desc",
            Self::Job => "job",
            Self::All => "all",
            Self::Not => "not",
        }
    }
}

/// A recognised command token (without its prefix).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandWord {
    /// `unit-search`: the multi-line refinement search.
    UnitSearch,
    /// `skills-by-name <text>`: shorthand for `unit-search skill-name <text>`.
    SkillsByName,
    /// `skills-by-desc <text>`: shorthand for `unit-search skill-desc <text>`.
    SkillsByDescription,
    /// `res <unit>/<esper>`: resonance lookup target.
    Resonance,
}

/// Runtime storage for command and keyword spellings.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    /// Command prefix, e.g. `!`.
    prefix: String,
    /// Lowercased keyword spelling -> keyword
    keywords: HashMap<String, Keyword>,
    /// Lowercased command spelling (no prefix) -> command
    commands: HashMap<String, CommandWord>,
}

impl Vocabulary {
    /// Creates an empty vocabulary with the given command prefix.
    #[must_use]
    pub fn empty(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            keywords: HashMap::new(),
            commands: HashMap::new(),
        }
    }

    /// Creates the standard vocabulary with the `!` prefix.
    #[must_use]
    pub fn standard() -> Self {
        Self::standard_with_prefix("!")
    }

    /// Creates the standard vocabulary with a custom command prefix.
    #[must_use]
    pub fn standard_with_prefix(prefix: impl Into<String>) -> Self {
        let mut vocab = Self::empty(prefix);

        vocab.add_keyword("rarity", Keyword::Rarity);
        vocab.add_keyword("element", Keyword::Element);
        vocab.add_keyword("skill-name", Keyword::SkillName);
        vocab.add_keyword("skill-desc", Keyword::SkillDescription);
        vocab.add_keyword("skill-description", Keyword::SkillDescription);
        vocab.add_keyword("job", Keyword::Job);
        vocab.add_keyword("job-name", Keyword::Job);
        vocab.add_keyword("all", Keyword::All);
        vocab.add_keyword("not", Keyword::Not);

        vocab.add_command("unit-search", CommandWord::UnitSearch);
        vocab.add_command("skills-by-name", CommandWord::SkillsByName);
        vocab.add_command("skills-by-desc", CommandWord::SkillsByDescription);
        vocab.add_command("skills-by-description", CommandWord::SkillsByDescription);
        vocab.add_command("res", CommandWord::Resonance);
        vocab.add_command("resonance", CommandWord::Resonance);

        vocab
    }

    /// Registers a keyword spelling.
    pub fn add_keyword(&mut self, word: &str, keyword: Keyword) {
        self.keywords.insert(word.to_lowercase(), keyword);
    }

    /// Registers a command spelling (without prefix).
    pub fn add_command(&mut self, word: &str, command: CommandWord) {
        self.commands.insert(word.to_lowercase(), command);
    }

    /// The command prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Looks up a keyword, ignoring case.
    #[must_use]
    pub fn keyword(&self, word: &str) -> Option<Keyword> {
        self.keywords.get(&word.to_lowercase()).copied()
    }

    /// Looks up a command token including its prefix, ignoring case.
    #[must_use]
    pub fn command(&self, token: &str) -> Option<CommandWord> {
        let word = token.strip_prefix(self.prefix.as_str())?;
        self.commands.get(&word.to_lowercase()).copied()
    }

    /// All keyword spellings, sorted.
    #[must_use]
    pub fn keyword_spellings(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.keywords.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// All command spellings with prefix, sorted.
    #[must_use]
    pub fn command_spellings(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .commands
            .keys()
            .map(|w| format!("{}{w}", self.prefix))
            .collect();
        words.sort_unstable();
        words
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
