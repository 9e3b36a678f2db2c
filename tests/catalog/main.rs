//! Integration tests for Layer 1: Catalog
//!
//! Tests for the snapshot builder, the publish point, and snapshot files.

mod builder;
mod store;
