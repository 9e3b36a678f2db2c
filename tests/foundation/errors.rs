//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use roster_foundation::error::ErrorContext;
use roster_foundation::{Error, ErrorKind, MAX_LISTED_CANDIDATES};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn parse_error_carries_line() {
    let err = Error::parse(4, "unknown criterion `colour`", "colour red");
    match &err.kind {
        ErrorKind::ParseError {
            line,
            message,
            source_line,
        } => {
            assert_eq!(*line, 4);
            assert!(message.contains("colour"));
            assert_eq!(source_line, "colour red");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(err.to_string().starts_with("parse error on line 4"));
}

#[test]
fn no_match_names_query() {
    let err = Error::no_match("Cloud");
    assert!(err.to_string().contains("Cloud"));
    assert!(err.is_user_error());
}

#[test]
fn catalog_errors_are_not_user_errors() {
    assert!(!Error::duplicate_unit("Rain").is_user_error());
    assert!(!Error::new(ErrorKind::IoError("disk".into())).is_user_error());
}

// =============================================================================
// Ambiguity Messages
// =============================================================================

#[test]
fn ambiguity_display_caps_candidates() {
    let candidates: Vec<String> = (0..8).map(|i| format!("Unit {i}")).collect();
    let err = Error::ambiguous("unit", candidates);
    let msg = err.to_string();
    assert!(msg.contains(&format!("max {MAX_LISTED_CANDIDATES}")));
    assert!(msg.contains("Unit 4"));
    assert!(!msg.contains("Unit 5"));
    assert!(msg.contains("double quotes"));
}

#[test]
fn user_message_uses_requested_cap() {
    let err = Error::ambiguous("little", vec!["Little Leela".into(), "Little Leela (Halloween)".into()]);
    let msg = err.user_message(1);
    assert!(msg.contains("Little Leela"));
    assert!(!msg.contains("Halloween"));
    let msg = err.user_message(10);
    assert!(msg.contains("Halloween"));
}

#[test]
fn ambiguity_keeps_every_candidate() {
    let err = Error::ambiguous("x", (0..8).map(|i| i.to_string()).collect());
    let ErrorKind::Ambiguous { candidates, .. } = err.kind else {
        panic!("expected ambiguity");
    };
    assert_eq!(candidates.len(), 8);
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    let ctx = ErrorContext::new().with_source("queries.txt").with_line(12);
    assert_eq!(ctx.to_string(), "at queries.txt:12");
    let err = Error::no_match("x").with_context(ctx);
    assert!(err.context.is_some());
}
