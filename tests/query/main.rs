//! Integration tests for Layer 2: Query
//!
//! Tests for command parsing and free-text name resolution.

mod resolver;
