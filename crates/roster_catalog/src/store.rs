//! Publish point for the current catalog snapshot.
//!
//! Queries take an `Arc<Catalog>` with [`CatalogStore::snapshot`] and keep it
//! for their whole run. A reload builds a complete new catalog first and then
//! swaps the pointer, so a query sees either the old snapshot or the new one,
//! never a mix.

use std::sync::{Arc, PoisonError, RwLock};

use roster_foundation::Result;
use tracing::info;

use crate::catalog::Catalog;
use crate::provider::CatalogProvider;

#[derive(Debug)]
struct Published {
    catalog: Arc<Catalog>,
    generation: u64,
}

/// Holds the current catalog snapshot.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Published>,
}

impl CatalogStore {
    /// Creates a store publishing `catalog` as generation 0.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Published {
                catalog: Arc::new(catalog),
                generation: 0,
            }),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard.catalog)
    }

    /// Returns the generation of the current snapshot.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    /// Replaces the current snapshot and returns its generation.
    pub fn publish(&self, catalog: Catalog) -> u64 {
        let units = catalog.len();
        let catalog = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        guard.catalog = catalog;
        guard.generation += 1;
        info!(generation = guard.generation, units, "published catalog snapshot");
        guard.generation
    }

    /// Loads a fresh catalog from `provider` and publishes it.
    ///
    /// The current snapshot is left in place if loading fails.
    ///
    /// # Errors
    ///
    /// Returns the provider's error.
    pub fn reload(&self, provider: &dyn CatalogProvider) -> Result<u64> {
        let catalog = provider.load_catalog()?;
        Ok(self.publish(catalog))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Catalog::new())
    }
}
