//! Integration tests for Layer 3: Engine
//!
//! Tests for query evaluation, result formatting, and the query service.

mod pipeline;
