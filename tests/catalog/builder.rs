//! Integration tests for catalog construction.

use roster_catalog::sample::{sample_catalog, sample_drafts};
use roster_catalog::{Catalog, JobDraft, UnitDraft};
use roster_foundation::{Element, ErrorKind, Rarity};

fn knight(name: &str) -> UnitDraft {
    UnitDraft::new(name, Rarity::SuperRare)
        .with_element(Element::Earth)
        .with_job(JobDraft::new("Knight").with_skill("Cover", "Protects an ally.", 2))
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn unit_names_unique_ignoring_case() {
    let result = Catalog::from_drafts(vec![knight("Rain"), knight("RAIN")]);
    let err = result.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateUnit(ref name) if name == "RAIN"));
}

#[test]
fn zero_learn_level_rejected() {
    let draft = UnitDraft::new("Lid", Rarity::Rare)
        .with_job(JobDraft::new("Engineer").with_skill("Repair", "Fixes things.", 0));
    let err = Catalog::from_drafts(vec![draft]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidLevel { level: 0, .. }));
}

#[test]
fn duplicate_elements_collapse() {
    let draft = UnitDraft::new("Fina", Rarity::UltraRare)
        .with_element(Element::Light)
        .with_element(Element::Light)
        .with_element(Element::Water);
    let catalog = Catalog::from_drafts(vec![draft]).unwrap();
    let unit = catalog.find_unit("fina").unwrap();
    assert_eq!(unit.elements(), &[Element::Light, Element::Water]);
}

#[test]
fn back_references_point_at_owners() {
    let catalog = sample_catalog();
    for unit in catalog.units() {
        for job in unit.jobs() {
            assert_eq!(job.unit(), unit.id());
            assert_eq!(catalog.job(job.id()).map(|j| j.name()), Some(job.name()));
            for entry in job.skills() {
                assert_eq!(entry.job(), job.id());
                assert!(entry.level() > 0);
            }
        }
    }
}

// =============================================================================
// Structural Sharing
// =============================================================================

#[test]
fn with_unit_leaves_original_untouched() {
    let base = Catalog::from_drafts(vec![knight("Rain")]).unwrap();
    let extended = base.with_unit(knight("Lasswell")).unwrap();
    assert_eq!(base.len(), 1);
    assert_eq!(extended.len(), 2);
    assert!(base.find_unit("Lasswell").is_none());
    assert!(extended.find_unit("lasswell").is_some());
}

#[test]
fn failed_insert_returns_error_only() {
    let base = Catalog::from_drafts(vec![knight("Rain")]).unwrap();
    assert!(base.with_unit(knight("rain")).is_err());
    assert_eq!(base.len(), 1);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn unit_names_in_insertion_order() {
    let catalog = sample_catalog();
    let expected: Vec<String> = sample_drafts().into_iter().map(|d| d.name).collect();
    assert_eq!(catalog.unit_names(), expected);
}

#[test]
fn job_names_sorted_and_distinct() {
    let catalog = sample_catalog();
    let names = catalog.job_names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
    assert!(names.contains(&"Black Mage"));
}

#[test]
fn to_drafts_rebuilds_equal_catalog() {
    let catalog = sample_catalog();
    let rebuilt = Catalog::from_drafts(catalog.to_drafts()).unwrap();
    assert_eq!(rebuilt.to_drafts(), catalog.to_drafts());
}

#[test]
fn board_skills_in_job_then_board_order() {
    let catalog = sample_catalog();
    let mont = catalog.find_unit("Mont Leonis").unwrap();
    let jobs: Vec<&str> = mont
        .board_skills()
        .filter(|entry| entry.skill().name == "Cover")
        .map(|entry| catalog.job(entry.job()).unwrap().name())
        .collect();
    assert_eq!(jobs, vec!["Paladin", "Knight"]);
}
