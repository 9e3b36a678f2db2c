//! Session state for the REPL.
//!
//! A session owns the catalog publish point and the query service. Commands
//! always run against the snapshot that is current when they start; a reload
//! swaps in a new snapshot without disturbing commands already running.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use roster_catalog::sample::sample_catalog;
use roster_catalog::{Catalog, CatalogStore, FileProvider};
use roster_engine::{EngineConfig, QueryService};
use roster_foundation::{Error, ErrorKind, Result};
use tracing::info;

/// Session state for an interactive or batch run.
pub struct Session {
    /// Publish point for catalog snapshots.
    store: CatalogStore,

    /// Parser, pipeline, and formatter.
    service: QueryService,

    /// Snapshot file the current catalog came from, if any.
    source: Option<PathBuf>,
}

impl Session {
    /// Creates a session over the built-in sample catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(sample_catalog(), EngineConfig::default())
    }

    /// Creates a session over `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, config: EngineConfig) -> Self {
        Self {
            store: CatalogStore::new(catalog),
            service: QueryService::new(config),
            source: None,
        }
    }

    /// Creates a session by loading a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn from_file(path: &Path, config: EngineConfig) -> Result<Self> {
        let mut session = Self {
            store: CatalogStore::default(),
            service: QueryService::new(config),
            source: None,
        };
        session.load_file(path)?;
        Ok(session)
    }

    /// Replaces the query service, e.g. to add esper names.
    #[must_use]
    pub fn with_service(mut self, service: QueryService) -> Self {
        self.service = service;
        self
    }

    /// The current catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.store.snapshot()
    }

    /// The catalog publish point.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// The query service.
    #[must_use]
    pub fn service(&self) -> &QueryService {
        &self.service
    }

    /// The snapshot file last loaded, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Runs a command, returning its output or a structured error.
    ///
    /// # Errors
    ///
    /// See [`QueryService::execute`].
    pub fn execute(&self, input: &str) -> Result<String> {
        let catalog = self.store.snapshot();
        self.service.execute(&catalog, input)
    }

    /// Runs a command, rendering errors as user-facing text.
    #[must_use]
    pub fn respond(&self, input: &str) -> String {
        let catalog = self.store.snapshot();
        self.service.respond(&catalog, input)
    }

    /// Loads a snapshot file and publishes it.
    ///
    /// Returns the new snapshot generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded; the current
    /// snapshot is kept in that case.
    pub fn load_file(&mut self, path: &Path) -> Result<u64> {
        let provider = FileProvider::new(path);
        let generation = self.store.reload(&provider)?;
        info!(path = %path.display(), generation, "catalog loaded");
        self.source = Some(path.to_path_buf());
        Ok(generation)
    }

    /// Reloads the snapshot file last loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if no file was loaded, or if loading fails.
    pub fn reload(&mut self) -> Result<u64> {
        let path = self.source.clone().ok_or_else(|| {
            Error::new(ErrorKind::Internal(
                "no catalog file to reload (using built-in catalog)".to_string(),
            ))
        })?;
        self.load_file(&path)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
