//! Configuration for query evaluation and output.

/// Default cap on listed result records.
pub const DEFAULT_MAX_RESULTS: usize = 25;

/// Configuration for the query service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Records listed before the output is truncated.
    pub max_results: usize,

    /// Candidate names listed in an ambiguity message.
    pub max_listed_candidates: usize,

    /// Prefix every command token starts with.
    pub command_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            max_listed_candidates: roster_foundation::MAX_LISTED_CANDIDATES,
            command_prefix: "!".to_string(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration that never truncates listings.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_results: usize::MAX,
            ..Self::default()
        }
    }

    /// Builder method to set the listing cap.
    #[must_use]
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Builder method to set how many ambiguous candidates are listed.
    #[must_use]
    pub fn with_max_listed_candidates(mut self, max: usize) -> Self {
        self.max_listed_candidates = max;
        self
    }

    /// Builder method to set the command prefix.
    #[must_use]
    pub fn with_command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = prefix.into();
        self
    }
}
