//! One-call command handling: parse, evaluate, format.

use roster_catalog::Catalog;
use roster_foundation::{Error, Result};
use roster_query::{Command, Query, QueryParser, ResonanceTarget, Vocabulary};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::format::{NO_RESULTS, NO_SKILLS, RESULTS_HEADER, ResultFormatter, SKILLS_HEADER};
use crate::pipeline::QueryExecutor;

/// Runs commands against catalog snapshots.
///
/// The service holds no catalog of its own; every call receives the snapshot
/// to read, so a reload between calls is picked up by the next one.
#[derive(Clone, Debug)]
pub struct QueryService {
    parser: QueryParser,
    config: EngineConfig,
    espers: Vec<String>,
}

impl QueryService {
    /// Creates a service using `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let vocabulary = Vocabulary::standard_with_prefix(config.command_prefix.clone());
        Self {
            parser: QueryParser::with_vocabulary(vocabulary),
            config,
            espers: Vec::new(),
        }
    }

    /// Sets the esper names `!res` targets are resolved against.
    ///
    /// With no esper names the esper half is echoed as typed.
    #[must_use]
    pub fn with_espers<I, S>(mut self, espers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.espers = espers.into_iter().map(Into::into).collect();
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The parser, for callers that want completion words.
    #[must_use]
    pub fn parser(&self) -> &QueryParser {
        &self.parser
    }

    /// Runs one command and returns its rendered output.
    ///
    /// # Errors
    ///
    /// Returns parse errors, and `NoMatch` / `Ambiguous` errors from name
    /// resolution. An empty search result is not an error.
    pub fn execute(&self, catalog: &Catalog, input: &str) -> Result<String> {
        match self.parser.parse(input)? {
            Command::Search(query) => Ok(self.search(catalog, &query, RESULTS_HEADER, NO_RESULTS)),
            Command::SkillSearch(query) => {
                Ok(self.search(catalog, &query, SKILLS_HEADER, NO_SKILLS))
            }
            Command::Resonance(target) => self.resolve_resonance(catalog, &target),
        }
    }

    /// Runs one command, rendering any error as user-facing text.
    #[must_use]
    pub fn respond(&self, catalog: &Catalog, input: &str) -> String {
        self.execute(catalog, input).unwrap_or_else(|err| self.render_error(&err))
    }

    /// Renders an error the way [`respond`](Self::respond) shows it.
    #[must_use]
    pub fn render_error(&self, err: &Error) -> String {
        if err.is_user_error() {
            err.user_message(self.config.max_listed_candidates)
        } else {
            warn!(error = %err, "command failed");
            format!("error: {err}")
        }
    }

    fn search(
        &self,
        catalog: &Catalog,
        query: &Query,
        header: &'static str,
        empty: &'static str,
    ) -> String {
        let results = QueryExecutor::evaluate(catalog, query);
        debug!(records = results.len(), "search complete");
        ResultFormatter::with_config(catalog, &self.config)
            .with_wording(header, empty)
            .format(&results)
    }

    fn resolve_resonance(&self, catalog: &Catalog, target: &ResonanceTarget) -> Result<String> {
        let units = catalog.unit_names();
        let resolved = target.resolve(&units, &self.espers)?;
        debug!(target = %resolved, "resonance resolved");
        Ok(format!("Resonance lookup for {resolved}"))
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
