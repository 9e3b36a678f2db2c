//! Integration tests for the catalog publish point.

use std::sync::Arc;

use roster_catalog::sample::sample_catalog;
use roster_catalog::{Catalog, CatalogProvider, CatalogStore, StaticProvider, UnitDraft};
use roster_foundation::{Error, Rarity, Result};

#[test]
fn held_snapshot_outlives_reload() {
    let store = CatalogStore::new(sample_catalog());
    let held = store.snapshot();

    let replacement = Catalog::from_drafts(vec![UnitDraft::new("Rain", Rarity::UltraRare)]).unwrap();
    let generation = store.reload(&StaticProvider::new(replacement)).unwrap();

    assert_eq!(generation, 1);
    assert_eq!(held.len(), sample_catalog().len());
    assert!(held.find_unit("Lasswell").is_some());
    assert_eq!(store.snapshot().unit_names(), vec!["Rain"]);
}

#[test]
fn snapshots_are_shared_not_copied() {
    let store = CatalogStore::new(sample_catalog());
    let a = store.snapshot();
    let b = store.snapshot();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn generations_increase() {
    let store = CatalogStore::default();
    assert_eq!(store.generation(), 0);
    assert_eq!(store.publish(Catalog::new()), 1);
    assert_eq!(store.publish(Catalog::new()), 2);
    assert_eq!(store.generation(), 2);
}

#[test]
fn failing_provider_changes_nothing() {
    let store = CatalogStore::new(sample_catalog());
    let failing = || -> Result<Catalog> { Err(Error::duplicate_unit("Rain")) };
    assert!(store.reload(&failing).is_err());
    assert_eq!(store.generation(), 0);
    assert_eq!(store.snapshot().len(), sample_catalog().len());
}

#[test]
fn static_provider_is_a_provider() {
    let provider = StaticProvider::new(sample_catalog());
    let loaded = provider.load_catalog().unwrap();
    assert!(loaded.find_unit("Vinera").is_some());
}
