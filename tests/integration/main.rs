//! End-to-end integration tests
//!
//! Tests that run commands through the session and REPL the way the CLI does.

mod session;
