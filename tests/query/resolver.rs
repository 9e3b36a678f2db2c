//! Integration tests for free-text name resolution.

use proptest::prelude::*;
use roster_catalog::sample::sample_catalog;
use roster_foundation::ErrorKind;
use roster_query::{NameResolver, Resolution, ResonanceTarget};

fn unit_names() -> Vec<String> {
    sample_catalog()
        .unit_names()
        .into_iter()
        .map(String::from)
        .collect()
}

// =============================================================================
// Resolution Rules
// =============================================================================

#[test]
fn prefix_resolves_short_names() {
    let names = unit_names();
    assert_eq!(NameResolver::resolve("Lass", &names), Resolution::Unique("Lasswell"));
    assert_eq!(NameResolver::resolve("mont", &names), Resolution::Unique("Mont Leonis"));
    assert_eq!(
        NameResolver::resolve("mont leonis", &names),
        Resolution::Unique("Mont Leonis")
    );
}

#[test]
fn all_words_fallback() {
    let names = unit_names();
    assert_eq!(
        NameResolver::resolve("Lee Hallow", &names),
        Resolution::Unique("Little Leela (Halloween)")
    );
    assert_eq!(
        NameResolver::resolve("macherie", &names),
        Resolution::Unique("'Summer' Macherie")
    );
}

#[test]
fn shared_prefix_is_ambiguous() {
    let names = unit_names();
    assert_eq!(
        NameResolver::resolve("Little Leela", &names),
        Resolution::Ambiguous(vec!["Little Leela", "Little Leela (Halloween)"])
    );
}

#[test]
fn quotes_force_whole_name() {
    let names = unit_names();
    assert_eq!(
        NameResolver::resolve("\"little leela\"", &names),
        Resolution::Unique("Little Leela")
    );
    assert_eq!(NameResolver::resolve("\"Lass\"", &names), Resolution::NotFound);
}

#[test]
fn blank_query_is_not_found() {
    assert_eq!(NameResolver::resolve("   ", &unit_names()), Resolution::NotFound);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn resolve_name_errors() {
    let names = unit_names();
    let err = NameResolver::resolve_name("  Cloud ", &names).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoMatch { ref query } if query == "Cloud"));

    let err = NameResolver::resolve_name("little", &names).unwrap_err();
    let ErrorKind::Ambiguous { candidates, .. } = err.kind else {
        panic!("expected ambiguity");
    };
    assert_eq!(candidates, vec!["Little Leela", "Little Leela (Halloween)"]);
}

#[test]
fn resonance_halves_resolve_independently() {
    let units = unit_names();
    let espers = ["Odin", "Ifrit", "Siren"];
    let target = ResonanceTarget::parse("mont/odin", 1, "!res mont/odin").unwrap();
    let resolved = target.resolve(&units, &espers).unwrap();
    assert_eq!((resolved.unit, resolved.esper), ("Mont Leonis", "Odin"));

    let target = ResonanceTarget::parse("mont/bahamut", 1, "!res mont/bahamut").unwrap();
    assert!(target.resolve(&units, &espers).is_err());
    assert!(ResonanceTarget::parse("mont odin", 1, "!res mont odin").is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn resolution_is_deterministic(query in "[a-zA-Z \"']{0,12}") {
        let names = unit_names();
        prop_assert_eq!(
            NameResolver::resolve(&query, &names),
            NameResolver::resolve(&query, &names)
        );
    }

    #[test]
    fn unique_result_is_a_candidate(query in "[a-z ]{1,10}") {
        let names = unit_names();
        if let Some(name) = NameResolver::resolve(&query, &names).unique() {
            prop_assert!(names.iter().any(|n| n == name));
        }
    }
}
