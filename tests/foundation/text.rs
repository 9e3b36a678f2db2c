//! Integration tests for free-text search terms.

use roster_foundation::{MatchMode, TextPattern, fuzzy_matches, normalize_name};

#[test]
fn quoted_terms_are_exact() {
    let p = TextPattern::parse("  \"Evasion Rate\" ");
    assert_eq!(p.mode(), MatchMode::Exact);
    assert_eq!(p.text(), "Evasion Rate");
    assert_eq!(p.to_string(), "\"Evasion Rate\"");
}

#[test]
fn bare_terms_are_fuzzy() {
    let p = TextPattern::parse("evasion rate");
    assert_eq!(p.mode(), MatchMode::Fuzzy);
    assert_eq!(p.to_string(), "evasion rate");
}

#[test]
fn lone_quote_is_bare_text() {
    assert_eq!(TextPattern::parse("\"").mode(), MatchMode::Fuzzy);
}

#[test]
fn exact_text_is_substring_ignoring_case() {
    let p = TextPattern::exact("lowers evasion");
    assert!(p.matches_text("Significantly LOWERS Evasion Rate for 1 turn."));
    assert!(!p.matches_text("Evasion lowers"));
}

#[test]
fn exact_name_is_whole_field() {
    let p = TextPattern::exact("knight");
    assert!(p.matches_name("Knight"));
    assert!(!p.matches_name("Dark Knight"));
}

#[test]
fn fuzzy_needs_every_word() {
    assert!(fuzzy_matches("Little Leela (Halloween)", "lee hallow"));
    assert!(!fuzzy_matches("Little Leela", "lee hallow"));
    assert!(fuzzy_matches("DEF +15, Jump +1", "+15 jump"));
}

#[test]
fn normalize_maps_spaces_to_hyphens() {
    assert_eq!(normalize_name("  Mont Leonis "), "mont-leonis");
}
